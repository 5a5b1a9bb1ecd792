//! Redirect chain resolution.
//!
//! This module follows redirect chains manually (the HTTP client has redirect
//! following disabled) so the full hop-by-hop path is visible: the first and
//! final status codes, every intermediate address, and loops where a chain
//! revisits one of its own addresses.
//!
//! All failure modes are represented as data on [`ResolutionOutcome`], never
//! as errors. Callers always receive a typed outcome.

mod outcome;
mod resolver;

// Re-export public API
pub use outcome::{Hop, ResolutionOutcome};
pub use resolver::resolve;
