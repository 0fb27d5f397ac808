//! Command-line argument definitions for the classdiag CLI.
//!
//! Every argument is optional: with none given the bundled diagram is written
//! to the per-user default location.

use clap::Parser;

/// Save the project's PlantUML class diagram to disk
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the output .puml file (defaults to the Desktop)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Print the diagram to standard output instead of writing a file
    #[arg(long, conflicts_with = "output")]
    pub stdout: bool,

    /// Log level (off, error, warn, info, debug, trace); overrides RUST_LOG
    #[arg(long)]
    pub log_level: Option<String>,
}
