//! epsg_export library: EPSG code to PROJ definition export
//!
//! This library scans a range of candidate EPSG codes, resolves each one to a
//! reference system, and writes the PROJ definition of every code that
//! resolves to a two-column CSV file (`EPSG Code,PROJ Definition`).
//!
//! # Example
//!
//! ```no_run
//! use epsg_export::{run_export, Config};
//! use std::path::PathBuf;
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = Config {
//!     output: PathBuf::from("projected.csv"),
//!     start: 2000,
//!     end: 33000,
//!     ..Default::default()
//! };
//!
//! let report = run_export(config)?;
//! println!("Wrote {} of {} codes", report.written, report.scanned);
//! # Ok(())
//! # }
//! ```
//!
//! The resolver is pluggable: anything implementing [`resolver::Resolver`]
//! can be handed to [`export::Exporter`] or [`export::run`].

#![warn(missing_docs)]

mod app;
pub mod config;
mod error_handling;
pub mod export;
pub mod initialization;
pub mod refine;
pub mod resolver;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel, ResolverSource};
pub use error_handling::{
    ExportError, InitializationError, RefinementError, ResolveError, SkipReason, SkipStats,
};
pub use run::{run_export, ExportReport};

// Internal run module (contains the top-level export logic)
mod run {
    use anyhow::{Context, Result};
    use log::info;
    use std::path::PathBuf;
    use std::time::Instant;

    use crate::app::{print_simple_summary, print_skip_statistics};
    use crate::config::Config;
    use crate::error_handling::SkipStats;
    use crate::export::{CodeRange, Exporter};
    use crate::initialization::{init_refiner, init_resolver};

    /// Results of an export run.
    #[derive(Debug, Clone)]
    pub struct ExportReport {
        /// Path of the written CSV file
        pub output: PathBuf,
        /// Candidate codes visited
        pub scanned: usize,
        /// Rows written after the header
        pub written: usize,
        /// Codes that produced no row, by reason
        pub skipped: SkipStats,
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
    }

    /// Runs an export with the provided configuration.
    ///
    /// Validates the range, builds the resolver and optional refiner, writes
    /// the CSV file, and logs a summary with per-reason skip counts.
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The range is empty or starts at zero
    /// - The definitions or refinements file cannot be loaded
    /// - The output file cannot be created or flushed
    pub fn run_export(config: Config) -> Result<ExportReport> {
        let range = CodeRange::new(config.start, config.end).context("Invalid scan range")?;
        let resolver = init_resolver(&config).context("Failed to initialize resolver")?;
        let refiner = init_refiner(config.refinements.as_deref())
            .context("Failed to initialize refinements")?;

        info!(
            "Exporting codes [{}, {}) to {}",
            range.start(),
            range.end(),
            config.output.display()
        );

        let start_time = Instant::now();
        let mut exporter = Exporter::new(&*resolver);
        if let Some(ref refiner) = refiner {
            exporter = exporter.with_refiner(refiner);
        }
        let stats = exporter
            .export_to_path(range, &config.output)
            .with_context(|| format!("Failed to export to {}", config.output.display()))?;
        let elapsed_seconds = start_time.elapsed().as_secs_f64();

        print_simple_summary(stats.scanned, stats.written, elapsed_seconds);
        print_skip_statistics(&stats.skipped);

        Ok(ExportReport {
            output: config.output,
            scanned: stats.scanned,
            written: stats.written,
            skipped: stats.skipped,
            elapsed_seconds,
        })
    }
}
