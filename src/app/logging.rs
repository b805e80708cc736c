//! Progress logging utilities.

use log::info;

/// Logs progress information about the code scan.
///
/// # Arguments
///
/// * `start_time` - The start time of the scan
/// * `scanned` - Candidate codes visited so far
/// * `written` - Rows written so far
/// * `total` - Candidate codes in the whole range
pub fn log_progress(start_time: std::time::Instant, scanned: usize, written: usize, total: usize) {
    let elapsed_secs = start_time.elapsed().as_secs_f64();
    let rate = if elapsed_secs > 0.0 {
        scanned as f64 / elapsed_secs
    } else {
        0.0
    };
    let pct = if total > 0 {
        scanned as f64 * 100.0 / total as f64
    } else {
        100.0
    };
    info!(
        "Scanned {}/{} codes ({:.0}%), {} rows written in {:.2} seconds (~{:.0} codes/sec)",
        scanned, total, pct, written, elapsed_secs, rate
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[test]
    fn test_log_progress_does_not_panic() {
        log_progress(Instant::now(), 0, 0, 0);
        log_progress(Instant::now(), 100_000, 3_000, 999_999);
    }
}
