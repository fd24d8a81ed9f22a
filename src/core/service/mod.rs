//! Secret service backends.
//!
//! The pipeline only needs two remote operations: list the secrets under a
//! project and read one secret version. Both go through [`SecretService`] so
//! the lister and fetcher do not depend on the transport.
//!
//! ## Backends
//!
//! - **gcp**: Google Cloud Secret Manager via the official client. Credentials
//!   come from Application Default Credentials.
//! - **memory**: In-process secrets, used by tests and dry runs.

use crate::core::constants::LATEST_VERSION;
use crate::error::Result;

pub mod gcp;
pub mod memory;

pub use gcp::GcpSecretManager;
pub use memory::MemorySecretService;

/// Remote secret store.
pub trait SecretService {
    /// List fully qualified secret names under `parent`.
    ///
    /// `filter` is forwarded to the service verbatim. Names come back in the
    /// service's listing order, across all pages.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::List` if the request fails.
    fn list_secret_names(&self, parent: &str, filter: Option<&str>) -> Result<Vec<String>>;

    /// Read the raw payload of a fully qualified secret version.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Access` if the version cannot be read.
    fn access_secret_version(&self, name: &str) -> Result<Vec<u8>>;

    /// Backend name for logs.
    fn name(&self) -> &'static str;
}

/// Resource name of a project: `projects/{project}`.
pub fn project_parent(project: &str) -> String {
    format!("projects/{}", project)
}

/// Resource name of the latest version of a secret.
pub fn latest_version_name(project: &str, secret: &str) -> String {
    format!(
        "projects/{}/secrets/{}/versions/{}",
        project, secret, LATEST_VERSION
    )
}

/// Short name of a resource: everything after the last `/`.
pub fn short_name(resource: &str) -> &str {
    match resource.rfind('/') {
        Some(idx) => &resource[idx + 1..],
        None => resource,
    }
}
