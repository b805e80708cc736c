//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `epsg_export` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use epsg_export::initialization::init_logger_with;
use epsg_export::{run_export, Config};

fn main() -> Result<()> {
    // Load EPSG_EXPORT_* variables from a .env file, if one exists
    let _ = dotenvy::dotenv();

    let config = Config::parse();

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    match run_export(config) {
        Ok(report) => {
            println!(
                "CSV file '{}' generated successfully.",
                report.output.display()
            );
            Ok(())
        }
        Err(e) => {
            eprintln!("epsg_export error: {:#}", e);
            process::exit(1);
        }
    }
}
