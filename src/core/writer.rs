//! Output rendering and writing.
//!
//! Three formats, all keyed by [`normalize_key`](crate::core::domain::normalize_key):
//!
//! - `env`: `KEY='value'` lines written to `<filename>`
//! - `json`: a single object with 2-space indentation written to `<filename>.json`
//! - `stdout`: `KEY=value` lines on standard output

use std::io::Write;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use tracing::debug;
use zeroize::Zeroizing;

use crate::core::constants::JSON_EXTENSION;
use crate::core::domain::SecretValues;
use crate::error::Result;

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Env,
    Json,
    Stdout,
}

impl Format {
    /// File written for `filename`, or `None` when printing to stdout.
    pub fn output_path(&self, filename: &str) -> Option<PathBuf> {
        match self {
            Format::Env => Some(PathBuf::from(filename)),
            Format::Json => Some(PathBuf::from(format!("{}.{}", filename, JSON_EXTENSION))),
            Format::Stdout => None,
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Format::Env => "env",
            Format::Json => "json",
            Format::Stdout => "stdout",
        };
        write!(f, "{}", name)
    }
}

/// Render `KEY='value'` lines.
///
/// Values are single-quoted as-is, without escaping.
pub fn render_env(values: &SecretValues) -> Zeroizing<String> {
    let mut output = Zeroizing::new(String::new());
    for (key, value) in values.records() {
        output.push_str(&format!("{}='{}'\n", key, value));
    }
    output
}

/// Render a JSON object with 2-space indentation, keys in insertion order.
///
/// Keys that collide after normalization keep the first position and the
/// last value.
///
/// # Errors
///
/// Returns `Error::Json` if serialization fails.
pub fn render_json(values: &SecretValues) -> Result<Zeroizing<String>> {
    let mut object = Map::new();
    for (key, value) in values.records() {
        object.insert(key, Value::String(value.to_string()));
    }
    Ok(Zeroizing::new(serde_json::to_string_pretty(&Value::Object(object))?))
}

/// Render unquoted `KEY=value` lines.
pub fn render_stdout(values: &SecretValues) -> Zeroizing<String> {
    let mut output = Zeroizing::new(String::new());
    for (key, value) in values.records() {
        output.push_str(&format!("{}={}\n", key, value));
    }
    output
}

/// Write `values` in `format`.
///
/// File formats truncate any existing file at the target path; `stdout`
/// writes to `out`. Returns the path written, if any.
///
/// # Errors
///
/// Returns `Error::Io` or `Error::Json` on failure.
pub fn write_secrets(
    format: Format,
    values: &SecretValues,
    filename: &str,
    out: &mut dyn Write,
) -> Result<Option<PathBuf>> {
    let content = match format {
        Format::Env => render_env(values),
        Format::Json => render_json(values)?,
        Format::Stdout => render_stdout(values),
    };

    match format.output_path(filename) {
        Some(path) => {
            write_file(&path, &content)?;
            debug!(path = %path.display(), %format, count = values.len(), "secrets written");
            Ok(Some(path))
        }
        None => {
            out.write_all(content.as_bytes())?;
            out.flush()?;
            Ok(None)
        }
    }
}

/// Truncate-and-write with owner-only permissions on unix.
fn write_file(path: &Path, content: &str) -> Result<()> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

        let mut file = std::fs::OpenOptions::new()
            .create(true)
            .truncate(true)
            .write(true)
            .mode(0o600)
            .open(path)?;
        file.write_all(content.as_bytes())?;
        file.flush()?;

        // mode() only applies when the file is created
        std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600))?;
    }

    #[cfg(not(unix))]
    {
        std::fs::write(path, content)?;
    }

    Ok(())
}
