//! CLI logic for the classdiag tool.
//!
//! Resolves where the bundled class diagram should go, writes it there and
//! reports the saved location.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::io::{self, Write};

use log::info;

use classdiag::{ClassDiagError, DiagramDocument, DiagramWriter, OutputTarget};

/// Run the classdiag CLI application
///
/// Writes the bundled diagram to its destination and prints a confirmation
/// line to standard output.
///
/// # Errors
///
/// Returns `ClassDiagError` for:
/// - Configuration loading errors
/// - File I/O errors while writing the diagram
pub fn run(args: &Args) -> Result<(), ClassDiagError> {
    let stdout = io::stdout();
    run_with_output(args, &mut stdout.lock())
}

/// Run the application, sending user-facing output to `out`.
///
/// Nothing is written to `out` unless the diagram was saved, or, with
/// `--stdout`, the diagram itself is the output.
pub fn run_with_output(args: &Args, out: &mut impl Write) -> Result<(), ClassDiagError> {
    let document = DiagramDocument::bundled();

    // Stdout mode touches neither the config nor the filesystem
    if args.stdout {
        out.write_all(document.as_bytes())?;
        out.flush()?;
        return Ok(());
    }

    // Load configuration
    let app_config = config::load_config(args.config.as_ref())?;

    // An explicit --output wins over the configured destination
    let target = match &args.output {
        Some(path) => OutputTarget::new(path),
        None => app_config.output().target(),
    };
    info!(output_path = target.to_string(); "Saving class diagram");

    // Write output file
    let writer = DiagramWriter::new(document, target);
    let target = writer.write()?;

    writeln!(out, "{}", confirmation_message(target))?;

    Ok(())
}

/// The line printed after a successful write.
pub fn confirmation_message(target: &OutputTarget) -> String {
    format!("Class diagram saved to {target}")
}
