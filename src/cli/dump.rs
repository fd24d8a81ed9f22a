//! Dump command - list, fetch, and write secrets.

use std::io::Write;
use std::path::PathBuf;

use tracing::info;

use crate::cli::output;
use crate::core::config::Config;
use crate::core::service::SecretService;
use crate::core::{fetcher, lister, writer};
use crate::error::Result;

/// Run the full pipeline against `service`.
///
/// Progress goes to stderr; in `stdout` format the secrets are written to
/// `out`. Returns the path of the written file, if any. Nothing is written
/// unless every secret was listed and fetched.
pub fn run<S>(service: &S, config: &Config, out: &mut dyn Write) -> Result<Option<PathBuf>>
where
    S: SecretService + ?Sized,
{
    info!(parent = %config.parent(), format = %config.format, "dumping secrets");

    match &config.filter {
        Some(filter) => output::step(format!(
            "listing secrets in project {} with filter {}",
            config.project, filter
        )),
        None => output::step(format!("listing secrets in project {}", config.project)),
    }
    let names = lister::list_secrets(service, &config.project, config.filter.as_deref())?;
    for name in names.iter() {
        output::list_item(name);
    }

    output::step(format!("fetching {} secret values", names.len()));
    let values = fetcher::fetch_secrets(service, &config.project, &names)?;

    if let Some(path) = config.output_path().filter(|p| p.exists()) {
        output::warn(&format!("overwriting {}", path.display()));
    }

    let written = writer::write_secrets(config.format, &values, &config.filename, out)?;
    if let Some(path) = &written {
        output::success(&format!(
            "wrote {} secrets from project {} to {}",
            values.len(),
            config.project,
            output::path(&path.display().to_string())
        ));
    }

    Ok(written)
}
