//! In-memory secret service.
//!
//! Holds secrets for a single project and evaluates `labels.KEY=VALUE`
//! filters itself, the way the remote service would. Every call is recorded
//! so callers can check what was requested.

use std::cell::RefCell;

use super::{latest_version_name, project_parent, SecretService};
use crate::error::{Result, ServiceError};

#[derive(Debug, Clone)]
struct StoredSecret {
    name: String,
    value: Vec<u8>,
    labels: Vec<(String, String)>,
}

/// Secret service backed by a `Vec`.
#[derive(Debug, Default)]
pub struct MemorySecretService {
    project: String,
    secrets: Vec<StoredSecret>,
    denied: Vec<String>,
    list_calls: RefCell<Vec<(String, Option<String>)>>,
    access_calls: RefCell<Vec<String>>,
}

impl MemorySecretService {
    pub fn new(project: impl Into<String>) -> Self {
        Self {
            project: project.into(),
            ..Self::default()
        }
    }

    /// Add a secret with a text value.
    pub fn with_secret(self, name: &str, value: &str) -> Self {
        self.with_labeled_secret(name, value.as_bytes(), &[])
    }

    /// Add a secret with a raw payload and labels.
    pub fn with_labeled_secret(mut self, name: &str, value: &[u8], labels: &[(&str, &str)]) -> Self {
        self.secrets.push(StoredSecret {
            name: name.to_string(),
            value: value.to_vec(),
            labels: labels
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        });
        self
    }

    /// Make access to `name` fail with a permission error.
    pub fn deny(mut self, name: &str) -> Self {
        self.denied.push(name.to_string());
        self
    }

    /// `(parent, filter)` of every list call, in order.
    pub fn list_calls(&self) -> Vec<(String, Option<String>)> {
        self.list_calls.borrow().clone()
    }

    /// Secret version names of every access call, in order.
    pub fn access_calls(&self) -> Vec<String> {
        self.access_calls.borrow().clone()
    }

    fn matches(secret: &StoredSecret, filter: Option<&str>) -> bool {
        let Some(filter) = filter.filter(|f| !f.is_empty()) else {
            return true;
        };
        let Some((key, value)) = filter
            .strip_prefix("labels.")
            .and_then(|rest| rest.split_once('='))
        else {
            return false;
        };
        secret.labels.iter().any(|(k, v)| k == key && v == value)
    }
}

impl SecretService for MemorySecretService {
    fn list_secret_names(&self, parent: &str, filter: Option<&str>) -> Result<Vec<String>> {
        self.list_calls
            .borrow_mut()
            .push((parent.to_string(), filter.map(str::to_string)));

        if parent != project_parent(&self.project) {
            return Err(ServiceError::List {
                parent: parent.to_string(),
                message: "project not found".to_string(),
            }
            .into());
        }

        Ok(self
            .secrets
            .iter()
            .filter(|s| Self::matches(s, filter))
            .map(|s| format!("{}/secrets/{}", parent, s.name))
            .collect())
    }

    fn access_secret_version(&self, name: &str) -> Result<Vec<u8>> {
        self.access_calls.borrow_mut().push(name.to_string());

        let secret = self
            .secrets
            .iter()
            .find(|s| latest_version_name(&self.project, &s.name) == name)
            .ok_or_else(|| ServiceError::Access {
                name: name.to_string(),
                message: "secret version not found".to_string(),
            })?;

        if self.denied.contains(&secret.name) {
            return Err(ServiceError::Access {
                name: name.to_string(),
                message: "permission denied".to_string(),
            }
            .into());
        }

        Ok(secret.value.clone())
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}
