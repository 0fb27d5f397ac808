//! classdiag CLI entry point.

use std::{process, str::FromStr};

use clap::Parser;
use log::{Level, LevelFilter, debug, error, info, log_enabled};

use classdiag_cli::{Args, error_adapter::ErrorAdapter};

fn main() {
    // Install miette's pretty panic hook early for better panic reports
    miette::set_panic_hook();

    // Parse arguments before anything can log
    let args = Args::parse();

    // RUST_LOG applies unless --log-level was given; warn when neither is set
    let mut logger =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if let Some(requested) = &args.log_level {
        let log_level = LevelFilter::from_str(requested).unwrap_or_else(|_| {
            eprintln!("Invalid log level: {requested}. Using 'warn' instead.");
            LevelFilter::Warn
        });
        logger.filter_level(log_level);
    }
    logger.init();

    info!(log_level:? = log::max_level(); "Starting classdiag");
    debug!(args:?; "Parsed arguments");

    // Run the application
    if let Err(err) = classdiag_cli::run(&args) {
        let reporter = miette::GraphicalReportHandler::new();
        let mut writer = String::new();
        reporter
            .render_report(&mut writer, &ErrorAdapter(&err))
            .expect("Writing to String buffer is infallible");

        // The report is the only failure feedback, so it bypasses a silenced logger
        if log_enabled!(Level::Error) {
            error!("Failed\n{writer}");
        } else {
            eprintln!("{writer}");
        }
        process::exit(1);
    }

    info!("Completed successfully");
}
