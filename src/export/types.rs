//! Export types.

use std::ops::Range;

use crate::error_handling::{ExportError, SkipStats};

/// Half-open range of candidate codes, `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeRange {
    start: u32,
    end: u32,
}

impl CodeRange {
    /// Validates and creates a range.
    ///
    /// # Errors
    ///
    /// Returns `ExportError::InvalidRange` unless `start >= 1` and `end > start`.
    pub fn new(start: u32, end: u32) -> Result<Self, ExportError> {
        if start < 1 || end <= start {
            return Err(ExportError::InvalidRange { start, end });
        }
        Ok(CodeRange { start, end })
    }

    /// First code scanned (inclusive).
    pub fn start(&self) -> u32 {
        self.start
    }

    /// End of the range (exclusive).
    pub fn end(&self) -> u32 {
        self.end
    }

    /// Number of candidate codes in the range, never zero.
    pub fn code_count(&self) -> usize {
        (self.end - self.start) as usize
    }

    /// Codes in ascending order.
    pub fn iter(&self) -> Range<u32> {
        self.start..self.end
    }
}

/// One exported row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRecord {
    /// EPSG code
    pub code: u32,
    /// PROJ definition written for the code
    pub definition: String,
}

/// Counters collected by one export.
#[derive(Debug, Clone, Default)]
pub struct ExportStats {
    /// Candidate codes visited
    pub scanned: usize,
    /// Rows written after the header
    pub written: usize,
    /// Codes that produced no row, by reason
    pub skipped: SkipStats,
}
