//! Google Cloud Secret Manager backend.
//!
//! Talks to the Secret Manager API through `google-cloud-secretmanager-v1`.
//! The client is async; each call is driven to completion on a
//! current-thread tokio runtime owned by the backend.
//!
//! ## Requirements
//!
//! - Application Default Credentials, e.g. from
//!   `gcloud auth application-default login` or `GOOGLE_APPLICATION_CREDENTIALS`
//! - `secretmanager.secrets.list` and `secretmanager.versions.access`
//!   permissions on the project

use google_cloud_gax::paginator::ItemPaginator as _;
use google_cloud_secretmanager_v1::client::SecretManagerService;
use tokio::runtime::Runtime;
use tracing::{debug, trace};

use super::SecretService;
use crate::error::{Result, ServiceError};

/// Secret Manager backend using the official client library.
pub struct GcpSecretManager {
    runtime: Runtime,
    client: SecretManagerService,
}

impl GcpSecretManager {
    /// Build the runtime and client.
    ///
    /// Credentials are resolved here, so authentication problems surface
    /// before any secret is listed.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Runtime` or `ServiceError::Client`.
    pub fn connect() -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(ServiceError::Runtime)?;

        let client = runtime
            .block_on(SecretManagerService::builder().build())
            .map_err(|e| ServiceError::Client(e.to_string()))?;

        debug!("connected to Secret Manager");
        Ok(Self { runtime, client })
    }

    async fn list(&self, parent: &str, filter: Option<&str>) -> Result<Vec<String>> {
        let mut request = self.client.list_secrets().set_parent(parent);
        if let Some(filter) = filter {
            request = request.set_filter(filter);
        }

        let mut items = request.by_item();
        let mut names = Vec::new();
        while let Some(secret) = items.next().await {
            let secret = secret.map_err(|e| ServiceError::List {
                parent: parent.to_string(),
                message: e.to_string(),
            })?;
            trace!(name = %secret.name, "listed secret");
            names.push(secret.name);
        }

        Ok(names)
    }

    async fn access(&self, name: &str) -> Result<Vec<u8>> {
        let response = self
            .client
            .access_secret_version()
            .set_name(name)
            .send()
            .await
            .map_err(|e| ServiceError::Access {
                name: name.to_string(),
                message: e.to_string(),
            })?;

        let payload = response
            .payload
            .ok_or_else(|| ServiceError::MissingPayload(name.to_string()))?;

        trace!(secret = name, payload_len = payload.data.len(), "accessed secret version");
        Ok(payload.data.to_vec())
    }
}

impl SecretService for GcpSecretManager {
    fn list_secret_names(&self, parent: &str, filter: Option<&str>) -> Result<Vec<String>> {
        self.runtime.block_on(self.list(parent, filter))
    }

    fn access_secret_version(&self, name: &str) -> Result<Vec<u8>> {
        self.runtime.block_on(self.access(name))
    }

    fn name(&self) -> &'static str {
        "gcp"
    }
}
