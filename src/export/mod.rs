//! CSV export of resolved codes.
//!
//! This module scans a range of candidate codes, resolves each through a
//! [`Resolver`](crate::resolver::Resolver), and writes one CSV row per code
//! that resolves. Codes that fail to resolve are skipped and counted.

mod writer;
mod types;

pub use writer::{run, Exporter};
pub use types::{CodeRange, ExportRecord, ExportStats};
