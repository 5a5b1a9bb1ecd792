//! Application-level helpers shared by the run loop and the binary.

mod logging;

// Re-export public API
pub use logging::log_progress;
