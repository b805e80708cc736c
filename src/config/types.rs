//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::constants::{DEFAULT_OUTPUT_PATH, DEFAULT_RANGE_END, DEFAULT_RANGE_START};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace (every skipped code is reported here)
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Where reference system definitions come from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ResolverSource {
    /// The EPSG database compiled into the binary
    Builtin,
    /// A PROJ `epsg` init file given with `--definitions`
    InitFile,
}

/// Export configuration.
///
/// Parsed from the command line by `clap`, but can also be constructed
/// programmatically through [`Default`].
///
/// # Examples
///
/// ```bash
/// # Full scan with the built-in database
/// epsg_export
///
/// # Only the geographic 2D range, into a custom file
/// epsg_export --start 4000 --end 5000 --output geographic.csv
///
/// # Use a PROJ init file instead of the built-in database
/// epsg_export --source init-file --definitions /usr/share/proj/epsg
/// ```
///
/// ```no_run
/// use epsg_export::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     output: PathBuf::from("out.csv"),
///     start: 4000,
///     end: 5000,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "epsg_export",
    about = "Writes the PROJ definition of every resolvable EPSG code to a CSV file."
)]
pub struct Config {
    /// Output CSV file (created or overwritten)
    #[arg(long, env = "EPSG_EXPORT_OUTPUT", default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// First code to scan (inclusive, >= 1)
    #[arg(long, env = "EPSG_EXPORT_START", default_value_t = DEFAULT_RANGE_START)]
    pub start: u32,

    /// End of the scan range (exclusive, > start)
    #[arg(long, env = "EPSG_EXPORT_END", default_value_t = DEFAULT_RANGE_END)]
    pub end: u32,

    /// Definition source: builtin|init-file
    #[arg(long, value_enum, env = "EPSG_EXPORT_SOURCE", default_value_t = ResolverSource::Builtin)]
    pub source: ResolverSource,

    /// PROJ init file with `<code> +proj=... <>` lines (required for init-file)
    #[arg(long, env = "EPSG_EXPORT_DEFINITIONS")]
    pub definitions: Option<PathBuf>,

    /// JSON file with PROJ string refinements applied before writing
    #[arg(long, env = "EPSG_EXPORT_REFINEMENTS")]
    pub refinements: Option<PathBuf>,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, env = "EPSG_EXPORT_LOG_LEVEL", default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, env = "EPSG_EXPORT_LOG_FORMAT", default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT_PATH),
            start: DEFAULT_RANGE_START,
            end: DEFAULT_RANGE_END,
            source: ResolverSource::Builtin,
            definitions: None,
            refinements: None,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}
