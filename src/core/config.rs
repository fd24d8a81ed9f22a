//! Run configuration.
//!
//! The resolved form of the command-line arguments. Built once, read-only
//! for the rest of the run.

use std::path::PathBuf;

use crate::core::service::project_parent;
use crate::core::validation::validate_project;
use crate::core::writer::Format;
use crate::error::Result;

/// Validated run configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Cloud project id
    pub project: String,
    /// Service-side filter expression, passed through untouched
    pub filter: Option<String>,
    /// Output format
    pub format: Format,
    /// Base output filename
    pub filename: String,
}

impl Config {
    /// Build and validate a configuration.
    ///
    /// An empty filter is treated as no filter.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidProject` if the project id is unusable.
    pub fn new(
        project: impl Into<String>,
        filter: Option<String>,
        format: Format,
        filename: impl Into<String>,
    ) -> Result<Self> {
        let project = project.into();
        validate_project(&project)?;

        Ok(Self {
            project,
            filter: filter.filter(|f| !f.is_empty()),
            format,
            filename: filename.into(),
        })
    }

    /// `projects/{project}`
    pub fn parent(&self) -> String {
        project_parent(&self.project)
    }

    /// File the run writes, if any.
    pub fn output_path(&self) -> Option<PathBuf> {
        self.format.output_path(&self.filename)
    }
}
