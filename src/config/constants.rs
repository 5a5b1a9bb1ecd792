//! Configuration constants (used as defaults).

/// Maximum redirect hops followed per resolution.
/// Chains cut off at this depth are reported as truncated, not as loops.
pub const DEFAULT_MAX_HOPS: usize = 20;

/// Per-hop request timeout in seconds.
/// One timeout per request; a timed-out hop ends the whole resolution with no
/// retry.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Default number of rows checked concurrently.
pub const DEFAULT_CONCURRENCY: usize = 20;
/// Lower bound for the concurrency setting.
pub const MIN_CONCURRENCY: usize = 5;
/// Upper bound for the concurrency setting.
/// More workers than this tends to trip rate limiting on the target site
/// rather than speed the run up.
pub const MAX_CONCURRENCY: usize = 40;

/// Maximum mapping rows processed per run.
/// The tool is sized for migrations of up to 2500 URLs; longer inputs are
/// truncated with a warning.
pub const MAX_ROWS_PER_RUN: usize = 2500;

/// Progress logging interval in seconds.
pub const LOGGING_INTERVAL_SECS: u64 = 5;

/// Offset between a record's zero-based index and its row number in the
/// source file: the header is row 1, so data row `i` is row `i + 2`.
pub const HEADER_ROW_OFFSET: usize = 2;
