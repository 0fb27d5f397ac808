//! Error types for classdiag operations.

use std::{io, path::PathBuf};

use thiserror::Error;

/// The main error type for classdiag operations.
#[derive(Debug, Error)]
pub enum ClassDiagError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Opening or filling the destination file failed.
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ClassDiagError {
    /// Create a new `Write` error for the given destination.
    pub fn new_write_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }
}
