//! Skip statistics tracking.
//!
//! Counts codes that produced no row, bucketed by [`SkipReason`]. The export
//! loop is sequential, so plain counters are enough.

use std::collections::HashMap;
use strum::IntoEnumIterator;

use super::types::SkipReason;

/// Per-reason skip counters.
///
/// Every [`SkipReason`] is initialized to zero on creation.
#[derive(Debug, Clone)]
pub struct SkipStats {
    counts: HashMap<SkipReason, usize>,
}

impl SkipStats {
    /// Creates counters with every reason at zero.
    pub fn new() -> Self {
        let mut counts = HashMap::new();
        for reason in SkipReason::iter() {
            counts.insert(reason, 0);
        }
        SkipStats { counts }
    }

    /// Increment the counter for `reason`.
    pub fn increment(&mut self, reason: SkipReason) {
        *self.counts.entry(reason).or_insert(0) += 1;
    }

    /// Count recorded for `reason`.
    pub fn count(&self, reason: SkipReason) -> usize {
        self.counts.get(&reason).copied().unwrap_or(0)
    }

    /// Total number of skipped codes across all reasons.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }
}

impl Default for SkipStats {
    fn default() -> Self {
        Self::new()
    }
}
