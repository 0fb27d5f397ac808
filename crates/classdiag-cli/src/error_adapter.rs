//! Error adapter for converting ClassDiagError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error type
//! and miette's rich diagnostic formatting used in the CLI.

use std::{fmt, io::ErrorKind};

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use classdiag::ClassDiagError;

/// Adapter for [`ClassDiagError`].
///
/// None of the variants carry source spans, so only a code and, for a
/// missing destination directory, a help line are attached.
pub struct ErrorAdapter<'a>(pub &'a ClassDiagError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

// Every variant's message already embeds its cause, so no source chain is
// exposed to the report handler.
impl std::error::Error for ErrorAdapter<'_> {}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            ClassDiagError::Io(_) => "classdiag::io",
            ClassDiagError::Write { .. } => "classdiag::write",
            ClassDiagError::Config(_) => "classdiag::config",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match &self.0 {
            ClassDiagError::Write { source, .. } if source.kind() == ErrorKind::NotFound => {
                Some(Box::new(
                    "the destination directory must already exist; pass --output to choose another",
                ))
            }
            _ => None,
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        None
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}
