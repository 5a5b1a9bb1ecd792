//! redirect_checker library: batch validation of URL redirect mappings.
//!
//! Given a CSV of redirect mappings (a "from" URL and a "to" URL per row),
//! this library resolves the redirect chain of both sides of every row,
//! detects loops, and classifies problematic rows (loops, 4xx/5xx final
//! statuses). It is built to support website migration validation.
//!
//! # Example
//!
//! ```no_run
//! use redirect_checker::{run_check, Config};
//! use std::path::PathBuf;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     file: PathBuf::from("mappings.csv"),
//!     max_concurrency: 20,
//!     ..Default::default()
//! };
//!
//! let report = run_check(config).await?;
//! println!(
//!     "{} rows checked: {} loops, {} problematic",
//!     report.summary.total_rows, report.summary.loop_rows, report.summary.problematic_rows
//! );
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your
//! application or call library functions from within an async context.

#![warn(missing_docs)]

mod app;
pub mod config;
mod error_handling;
mod evaluate;
mod initialization;
mod input;
pub mod report;
mod resolve;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::{InitializationError, InputError};
pub use evaluate::{evaluate_row, RowResult};
pub use initialization::{init_client, init_logger_with};
pub use input::{read_mappings, RedirectMapping};
pub use report::{export_csv, problem_reason, summarize, CheckSummary};
pub use resolve::{resolve, Hop, ResolutionOutcome};
pub use run::{run_check, CheckReport};

// Internal run module (contains the batch orchestration logic)
mod run {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    use anyhow::{Context, Result};
    use futures::stream::FuturesUnordered;
    use futures::StreamExt;
    use log::{info, warn};
    use tokio_util::sync::CancellationToken;

    use crate::app::log_progress;
    use crate::config::{Config, LOGGING_INTERVAL_SECS};
    use crate::evaluate::{evaluate_row, RowResult};
    use crate::initialization::{init_client, init_semaphore};
    use crate::input::read_mappings;
    use crate::report::{summarize, CheckSummary};

    /// Results of a completed redirect check run.
    #[derive(Debug, Clone)]
    pub struct CheckReport {
        /// Per-row results, sorted by row id.
        pub results: Vec<RowResult>,
        /// Aggregate counts over `results`.
        pub summary: CheckSummary,
        /// Elapsed time in seconds.
        pub elapsed_seconds: f64,
    }

    /// Runs a redirect check with the provided configuration.
    ///
    /// This is the main entry point for the library. It reads mapping rows
    /// from the input CSV, evaluates them concurrently (bounded by the
    /// configured worker count), and returns the collected results sorted by
    /// row id together with aggregate counts.
    ///
    /// Individual resolutions never fail; all network problems surface as
    /// absent statuses on the affected row.
    ///
    /// # Errors
    ///
    /// Returns an error if the input file cannot be read, has no
    /// recognizable from/to columns, or the HTTP client cannot be built.
    pub async fn run_check(config: Config) -> Result<CheckReport> {
        let mappings = read_mappings(&config.file, config.limit).with_context(|| {
            format!("Failed to read redirect mappings from {}", config.file.display())
        })?;
        let total_rows = mappings.len();
        info!(
            "Loaded {} mapping rows from {}",
            total_rows,
            config.file.display()
        );

        let client = init_client(&config).context("Failed to initialize HTTP client")?;
        let semaphore = init_semaphore(config.effective_concurrency());
        let max_hops = config.max_hops;

        let start_time = std::time::Instant::now();
        let completed_rows = Arc::new(AtomicUsize::new(0));

        let cancel = CancellationToken::new();
        let cancel_logging = cancel.child_token();
        let completed_for_logging = Arc::clone(&completed_rows);
        let logging_task = tokio::spawn(async move {
            let mut interval =
                tokio::time::interval(Duration::from_secs(LOGGING_INTERVAL_SECS));
            loop {
                tokio::select! {
                    _ = interval.tick() => {
                        log_progress(start_time, &completed_for_logging, total_rows);
                    }
                    _ = cancel_logging.cancelled() => {
                        break;
                    }
                }
            }
        });

        let mut tasks = FuturesUnordered::new();
        for mapping in mappings {
            let permit = match Arc::clone(&semaphore).acquire_owned().await {
                Ok(permit) => permit,
                Err(_) => {
                    warn!("Semaphore closed, skipping row {}", mapping.row_id);
                    continue;
                }
            };

            let client = Arc::clone(&client);
            let completed = Arc::clone(&completed_rows);
            tasks.push(tokio::spawn(async move {
                let _permit = permit;
                let row = evaluate_row(
                    &client,
                    mapping.row_id,
                    &mapping.from_url,
                    &mapping.to_url,
                    max_hops,
                )
                .await;
                completed.fetch_add(1, Ordering::SeqCst);
                row
            }));
        }

        let mut results: Vec<RowResult> = Vec::with_capacity(total_rows);
        while let Some(task_result) = tasks.next().await {
            match task_result {
                Ok(row) => results.push(row),
                Err(join_error) => {
                    warn!("Row task panicked: {:?}", join_error);
                }
            }
        }

        cancel.cancel();
        let _ = logging_task.await;

        // Completion order is nondeterministic under concurrency; present
        // rows in source-file order
        results.sort_by_key(|row| row.row_id);

        log_progress(start_time, &completed_rows, total_rows);

        let summary = summarize(&results);
        info!(
            "{} rows with redirects, {} loops, {} problematic rows",
            summary.redirect_rows, summary.loop_rows, summary.problematic_rows
        );

        Ok(CheckReport {
            results,
            summary,
            elapsed_seconds: start_time.elapsed().as_secs_f64(),
        })
    }
}
