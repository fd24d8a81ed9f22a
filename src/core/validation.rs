//! Input validation for secretdump.

use crate::error::{Error, Result};

/// Validate a project identifier.
///
/// The id is interpolated into resource names such as
/// `projects/{project}/secrets/{name}`, so it must be non-empty and free of
/// `/` and whitespace.
///
/// # Errors
///
/// Returns `Error::InvalidProject` if the id is unusable.
pub fn validate_project(project: &str) -> Result<()> {
    let reason = if project.is_empty() {
        Some("cannot be empty".to_string())
    } else if let Some(ch) = project.chars().find(|ch| *ch == '/' || ch.is_whitespace()) {
        Some(format!("invalid character {:?}", ch))
    } else {
        None
    };

    match reason {
        Some(reason) => Err(Error::InvalidProject {
            project: project.to_string(),
            reason,
        }),
        None => Ok(()),
    }
}
