//! Configuration types and CLI options.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    DEFAULT_CONCURRENCY, DEFAULT_MAX_HOPS, DEFAULT_TIMEOUT_SECS, MAX_CONCURRENCY, MIN_CONCURRENCY,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to
/// most verbose (Trace). Used with the `--log-level` CLI option.
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Configuration for a redirect check run.
///
/// Doubles as the CLI option struct (generated by `clap` from the field
/// attributes) and the library configuration; `Default` gives the same values
/// the CLI defaults to, for programmatic use.
///
/// # Examples
///
/// ```bash
/// # Basic usage
/// redirect_checker mappings.csv
///
/// # Faster run with results written to a file
/// redirect_checker mappings.csv --max-concurrency 40 --output results.csv
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "redirect_checker",
    about = "Checks a CSV of redirect mappings for status codes, redirect chains, and loops."
)]
pub struct Config {
    /// CSV file with 'Redirect from' and 'Redirect to' columns
    #[arg(value_parser)]
    pub file: PathBuf,

    /// Write per-row results as CSV to this file (stdout if omitted but --export is set)
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Export per-row results as CSV (to --output, or stdout)
    #[arg(long)]
    pub export: bool,

    /// Only check the first N rows of the input (capped at 2500 per run)
    #[arg(long)]
    pub limit: Option<usize>,

    /// Maximum redirect hops to follow per URL
    #[arg(long, default_value_t = DEFAULT_MAX_HOPS)]
    pub max_hops: usize,

    /// Per-hop request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// Number of rows checked concurrently
    ///
    /// Clamped to 5-40. Each row performs two redirect resolutions, so the
    /// number of in-flight requests can be up to twice this value.
    #[arg(long, default_value_t = DEFAULT_CONCURRENCY)]
    pub max_concurrency: usize,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl Config {
    /// The concurrency bound actually used for the run, clamped to the
    /// supported range.
    pub fn effective_concurrency(&self) -> usize {
        self.max_concurrency.clamp(MIN_CONCURRENCY, MAX_CONCURRENCY)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            file: PathBuf::from("mappings.csv"),
            output: None,
            export: false,
            limit: None,
            max_hops: DEFAULT_MAX_HOPS,
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            max_concurrency: DEFAULT_CONCURRENCY,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}
