//! Statistics printing.

use log::info;
use strum::IntoEnumIterator;

use crate::error_handling::{SkipReason, SkipStats};

/// Prints a simple one-line summary of the run.
pub fn print_simple_summary(scanned: usize, written: usize, elapsed_seconds: f64) {
    info!(
        "✅ Scanned {} code{} ({} written, {} skipped) in {:.1}s",
        scanned,
        if scanned == 1 { "" } else { "s" },
        written,
        scanned.saturating_sub(written),
        elapsed_seconds
    );
}

/// Prints per-reason skip counts to the log.
pub fn print_skip_statistics(stats: &SkipStats) {
    let total = stats.total();
    if total == 0 {
        return;
    }

    info!("Skip Counts ({} total):", total);
    for reason in SkipReason::iter() {
        let count = stats.count(reason);
        if count > 0 {
            info!("   {}: {}", reason.as_str(), count);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_skip_statistics_empty() {
        let stats = SkipStats::new();
        // Should not panic when nothing was skipped
        print_skip_statistics(&stats);
    }

    #[test]
    fn test_print_skip_statistics_with_skips() {
        let mut stats = SkipStats::new();
        stats.increment(SkipReason::UnknownCode);
        stats.increment(SkipReason::UnsupportedDefinition);
        print_skip_statistics(&stats);
    }

    #[test]
    fn test_print_simple_summary() {
        print_simple_summary(1, 1, 0.1);
        print_simple_summary(999_999, 6_000, 12.5);
    }
}
