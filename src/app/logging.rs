//! Progress logging utilities.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use log::info;

/// Logs progress information about row evaluation.
///
/// # Arguments
///
/// * `start_time` - The start time of the run
/// * `completed_rows` - Atomic counter of completed rows
/// * `total_rows` - Number of rows in this run
pub fn log_progress(
    start_time: std::time::Instant,
    completed_rows: &Arc<AtomicUsize>,
    total_rows: usize,
) {
    let elapsed = start_time.elapsed();
    let completed = completed_rows.load(Ordering::SeqCst);
    let elapsed_secs = elapsed.as_secs_f64();
    let rate = if elapsed_secs > 0.0 {
        completed as f64 / elapsed_secs
    } else {
        0.0
    };
    info!(
        "Checked {} of {} rows in {:.2} seconds (~{:.2} rows/sec)",
        completed, total_rows, elapsed_secs, rate
    );
}
