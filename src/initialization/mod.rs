//! Application initialization and resource setup.
//!
//! This module provides functions to initialize the shared resources:
//! - The HTTP client (redirects disabled, per-hop timeout)
//! - The concurrency semaphore
//! - The logger

mod client;
mod logger;

use std::sync::Arc;

use tokio::sync::Semaphore;

// Re-export public API
pub use client::init_client;
pub use logger::init_logger_with;

/// Initializes a semaphore for controlling concurrency.
///
/// The semaphore bounds the number of mapping rows evaluated at once; each
/// permit corresponds to one in-flight row.
pub fn init_semaphore(count: usize) -> Arc<Semaphore> {
    Arc::new(Semaphore::new(count))
}
