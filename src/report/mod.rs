//! Reporting over completed row results.
//!
//! This module provides:
//! - Aggregate counts (redirect rows, loops, problematic rows)
//! - Human-readable explanations for problematic rows
//! - CSV export of per-row results
//!
//! Everything here is a pure function over already-resolved rows; nothing in
//! this module touches the network.

mod export;
mod reasons;
mod summary;

// Re-export public API
pub use export::export_csv;
pub use reasons::problem_reason;
pub use summary::{is_problematic, is_redirect, summarize, CheckSummary};
