//! Error types for secretdump.
//!
//! Every failure is fatal: errors propagate with `?` up to `main`, which
//! prints them and exits with status 1.

use std::string::FromUtf8Error;

use thiserror::Error;

/// Top-level error.
#[derive(Debug, Error)]
pub enum Error {
    /// The project identifier cannot be used to build resource names.
    #[error("invalid project id '{project}': {reason}")]
    InvalidProject { project: String, reason: String },

    /// The Secret Manager API rejected a request or could not be reached.
    #[error(transparent)]
    Service(#[from] ServiceError),

    /// The listing returned nothing.
    #[error("{}", no_secrets_message(.project, .filter))]
    NoSecrets {
        project: String,
        filter: Option<String>,
    },

    /// A secret payload is not valid UTF-8 text.
    #[error("secret '{name}' is not valid UTF-8: {source}")]
    InvalidPayload {
        name: String,
        #[source]
        source: FromUtf8Error,
    },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Failures talking to the secret service.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("failed to start async runtime: {0}")]
    Runtime(#[source] std::io::Error),

    #[error("failed to create Secret Manager client: {0}")]
    Client(String),

    #[error("failed to list secrets in {parent}: {message}")]
    List { parent: String, message: String },

    #[error("failed to access {name}: {message}")]
    Access { name: String, message: String },

    #[error("no payload returned for {0}")]
    MissingPayload(String),
}

fn no_secrets_message(project: &str, filter: &Option<String>) -> String {
    match filter {
        Some(filter) => format!(
            "no secrets found in project {} with filter {}",
            project, filter
        ),
        None => format!("no secrets found in project {}", project),
    }
}

impl Error {
    /// Follow-up suggestion printed under the error, if any.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Error::NoSecrets {
                filter: Some(_), ..
            } => Some("check the --filter expression, e.g. labels.env=stage"),
            Error::Service(ServiceError::Client(_)) => {
                Some("run: gcloud auth application-default login")
            }
            Error::Service(ServiceError::List { .. }) => {
                Some("check the project id and your secretmanager.secrets.list permission")
            }
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
