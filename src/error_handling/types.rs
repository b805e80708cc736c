//! Error type definitions.
//!
//! This module defines all error types and skip categories used throughout the application.

use std::path::PathBuf;

use log::SetLoggerError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)]
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// The PROJ init file could not be read.
    #[error("Failed to read definitions file {}: {source}", .path.display())]
    DefinitionsFileError {
        /// Path that was requested
        path: PathBuf,
        /// Underlying I/O failure
        source: std::io::Error,
    },

    /// `--source init-file` was requested without `--definitions`.
    #[error("The init-file source requires a definitions path (--definitions)")]
    MissingDefinitionsPath,

    /// The refinements file could not be loaded.
    #[error("Refinements initialization error: {0}")]
    RefinementsError(#[from] RefinementError),
}

/// Failure to turn a code into a PROJ definition.
///
/// Every variant is skipped by the exporter; the variants exist so callers and
/// statistics can tell an unknown code from a definition that is unusable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// The resolver has no reference system registered under this code.
    #[error("EPSG:{code} is not a known code")]
    UnknownCode {
        /// Requested code
        code: u32,
    },

    /// The reference system exists but has no usable PROJ representation.
    #[error("EPSG:{code} has no PROJ definition: {reason}")]
    UnsupportedDefinition {
        /// Requested code
        code: u32,
        /// Why the definition was rejected
        reason: String,
    },

    /// Any other failure reported by the resolver backend.
    #[error("Resolver failed for EPSG:{code}: {message}")]
    Backend {
        /// Requested code
        code: u32,
        /// Backend message
        message: String,
    },
}

impl ResolveError {
    /// Code the failure refers to.
    pub fn code(&self) -> u32 {
        match self {
            ResolveError::UnknownCode { code }
            | ResolveError::UnsupportedDefinition { code, .. }
            | ResolveError::Backend { code, .. } => *code,
        }
    }

    /// Statistics bucket for this failure.
    pub fn skip_reason(&self) -> SkipReason {
        match self {
            ResolveError::UnknownCode { .. } => SkipReason::UnknownCode,
            ResolveError::UnsupportedDefinition { .. } => SkipReason::UnsupportedDefinition,
            ResolveError::Backend { .. } => SkipReason::ResolverFailure,
        }
    }
}

/// Error types for the export loop.
#[derive(Error, Debug)]
pub enum ExportError {
    /// The requested scan range is empty or starts at zero.
    #[error("Invalid code range [{start}, {end}): start must be >= 1 and end must be greater than start")]
    InvalidRange {
        /// Inclusive start
        start: u32,
        /// Exclusive end
        end: u32,
    },

    /// The output file could not be created.
    #[error("Failed to create output file {}: {source}", .path.display())]
    CreateOutputError {
        /// Requested output path
        path: PathBuf,
        /// Underlying I/O failure
        source: std::io::Error,
    },

    /// CSV serialization error.
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    /// I/O error on the output destination.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Error types for loading PROJ string refinements.
#[derive(Error, Debug)]
pub enum RefinementError {
    /// The refinements file could not be read.
    #[error("Failed to read refinements file {}: {source}", .path.display())]
    ReadError {
        /// Path that was requested
        path: PathBuf,
        /// Underlying I/O failure
        source: std::io::Error,
    },

    /// The refinements file is not valid JSON for the expected shape.
    #[error("Invalid refinements JSON: {0}")]
    ParseError(#[from] serde_json::Error),

    /// A refinement pattern failed to compile.
    #[error("Invalid refinement regex '{pattern}': {source}")]
    RegexError {
        /// Offending pattern
        pattern: String,
        /// Compiler error
        source: regex::Error,
    },

    /// A code list entry is neither a code nor an `a-b` range.
    #[error("Invalid code list entry '{0}'")]
    CodeListError(String),
}

/// Reasons a scanned code produced no row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum SkipReason {
    /// Code not present in the resolver's database
    UnknownCode,
    /// Reference system without a PROJ representation
    UnsupportedDefinition,
    /// Any other resolver failure
    ResolverFailure,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl SkipReason {
    /// Human-readable label used in statistics output.
    pub fn as_str(&self) -> &'static str {
        match self {
            SkipReason::UnknownCode => "Unknown code",
            SkipReason::UnsupportedDefinition => "Unsupported definition",
            SkipReason::ResolverFailure => "Resolver failure",
        }
    }
}
