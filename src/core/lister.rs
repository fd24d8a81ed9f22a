//! Secret listing.

use tracing::debug;

use crate::core::domain::SecretNames;
use crate::core::service::{project_parent, short_name, SecretService};
use crate::error::{Error, Result};

/// List the short names of all secrets in `project` matching `filter`.
///
/// The filter is handed to the service unchanged; nothing is filtered
/// locally. Names keep the service's listing order.
///
/// # Errors
///
/// Returns `Error::NoSecrets` if nothing matched, or the service error if
/// the listing failed.
pub fn list_secrets<S>(service: &S, project: &str, filter: Option<&str>) -> Result<SecretNames>
where
    S: SecretService + ?Sized,
{
    let parent = project_parent(project);
    debug!(backend = service.name(), %parent, filter, "listing secrets");

    let names: SecretNames = service
        .list_secret_names(&parent, filter)?
        .iter()
        .map(|resource| short_name(resource).to_string())
        .collect();

    if names.is_empty() {
        return Err(Error::NoSecrets {
            project: project.to_string(),
            filter: filter.map(str::to_string),
        });
    }

    debug!(count = names.len(), "secrets listed");
    Ok(names)
}
