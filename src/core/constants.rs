//! Constants used throughout secretdump.
//!
//! Centralizes magic strings and default values.

/// Default output filename (.env).
pub const DEFAULT_FILENAME: &str = ".env";

/// Extension appended to the filename in JSON mode.
pub const JSON_EXTENSION: &str = "json";

/// Version alias resolved by the service to the newest secret version.
pub const LATEST_VERSION: &str = "latest";

/// Environment variable overriding the log filter.
pub const LOG_ENV: &str = "SECRETDUMP_LOG";

/// Environment variable read as the default project id.
pub const PROJECT_ENV: &str = "GOOGLE_CLOUD_PROJECT";
