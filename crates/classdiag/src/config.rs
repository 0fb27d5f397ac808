//! Configuration types for classdiag.
//!
//! All types implement [`serde::Deserialize`] so they can be loaded from
//! external sources such as a TOML file.
//!
//! # Example
//!
//! ```
//! # use classdiag::config::AppConfig;
//! let config = AppConfig::default();
//! assert!(config.output().path().is_none());
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::OutputTarget;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Output configuration section.
    #[serde(default)]
    output: OutputConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the given output section.
    pub fn new(output: OutputConfig) -> Self {
        Self { output }
    }

    /// Returns the output configuration.
    pub fn output(&self) -> &OutputConfig {
        &self.output
    }
}

/// Where the diagram is written.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputConfig {
    /// Destination file, overriding the per-user default.
    #[serde(default)]
    path: Option<PathBuf>,
}

impl OutputConfig {
    /// Creates a new [`OutputConfig`] with an optional destination path.
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }

    /// Returns the configured destination path, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Returns the configured destination, or the per-user default.
    pub fn target(&self) -> OutputTarget {
        self.path
            .clone()
            .map(OutputTarget::from)
            .unwrap_or_else(OutputTarget::default_location)
    }
}
