//! Error handling and skip statistics.
//!
//! This module provides:
//! - Error type definitions (initialization, resolution, export, refinements)
//! - The skip taxonomy used when a code produces no row
//! - Per-reason skip counters
//!
//! Resolution failures never abort an export. They are turned into a
//! [`SkipReason`] and counted, while environment failures (unwritable output,
//! a failed row write, unreadable definitions) propagate to the caller.

mod stats;
mod types;

// Re-export public API
pub use stats::SkipStats;
pub use types::{
    ExportError, InitializationError, RefinementError, ResolveError, SkipReason,
};
