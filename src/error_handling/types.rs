//! Error type definitions.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Error types for reading the mapping CSV.
#[derive(Error, Debug)]
pub enum InputError {
    /// The input file could not be opened or parsed as CSV.
    #[error("Failed to read input CSV: {0}")]
    Csv(#[from] csv::Error),

    /// No from/to columns were found in the header row.
    #[error("No columns compatible with 'Redirect from' and 'Redirect to' were found")]
    ColumnsNotFound,
}
