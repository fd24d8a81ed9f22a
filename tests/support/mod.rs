//! Test support utilities for secretdump integration tests.
//!
//! Provides isolated working directories, an in-memory secret service
//! preloaded with fixtures, and binary command helpers.

#![allow(dead_code)]

pub mod fixtures;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;

use std::path::PathBuf;

use secretdump::core::config::Config;
use secretdump::core::writer::Format;
use tempfile::TempDir;

/// Test environment with an isolated output directory.
///
/// Paths handed to the pipeline are absolute, so no process-global state is
/// mutated and tests can run in parallel.
pub struct Test {
    /// Temporary directory receiving output files
    pub dir: TempDir,
}

impl Test {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        Self { dir }
    }

    /// Absolute path of `name` inside the test directory.
    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Config for `project` writing `filename` inside the test directory.
    pub fn config(
        &self,
        project: &str,
        filter: Option<&str>,
        format: Format,
        filename: &str,
    ) -> Config {
        Config::new(
            project,
            filter.map(str::to_string),
            format,
            self.path(filename).to_string_lossy().to_string(),
        )
        .expect("invalid test config")
    }

    /// Names of all files in the test directory.
    pub fn files(&self) -> Vec<String> {
        let mut files: Vec<String> = std::fs::read_dir(self.dir.path())
            .expect("failed to read temp dir")
            .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
            .collect();
        files.sort();
        files
    }
}
