//! Secret value retrieval.

use tracing::{debug, trace};

use crate::core::domain::{SecretNames, SecretValues};
use crate::core::service::{latest_version_name, SecretService};
use crate::error::{Error, Result};

/// Fetch the latest value of every secret in `names`.
///
/// Secrets are read one at a time in set order. The first failure aborts the
/// whole fetch and nothing is returned, so callers never see a partial map.
///
/// # Errors
///
/// Returns the service error for a failed access, or
/// `Error::InvalidPayload` for a value that is not UTF-8.
pub fn fetch_secrets<S>(service: &S, project: &str, names: &SecretNames) -> Result<SecretValues>
where
    S: SecretService + ?Sized,
{
    debug!(backend = service.name(), count = names.len(), "fetching secret values");

    let mut values = SecretValues::new();
    for name in names.iter() {
        let version = latest_version_name(project, name);
        let payload = service.access_secret_version(&version)?;
        let value = String::from_utf8(payload).map_err(|source| Error::InvalidPayload {
            name: name.to_string(),
            source,
        })?;

        trace!(secret = name, value_len = value.len(), "fetched secret");
        values.insert(name, value);
    }

    Ok(values)
}
