//! Main application modules.
//!
//! This module provides progress logging and statistics printing used by the
//! export loop and the top-level run.

pub mod logging;
pub mod statistics;

// Re-export public API
pub use logging::log_progress;
pub use statistics::{print_simple_summary, print_skip_statistics};
