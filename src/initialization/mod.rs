//! Application initialization and resource setup.
//!
//! This module provides functions to initialize the shared resources of an
//! export run:
//! - Logger
//! - Reference system resolver
//! - Optional PROJ string refiner
//!
//! All initialization functions return proper error types for error handling.

mod logger;
mod resolver;

// Re-export public API
pub use logger::init_logger_with;
pub use resolver::{init_refiner, init_resolver};
