//! Error handling types.
//!
//! Resolution failures are represented as data on `ResolutionOutcome`
//! (absent statuses, loop flag), never as errors, so the evaluator and the
//! report layers need no error handling of their own. Typed errors exist only
//! at the edges: initialization and input parsing.

mod types;

// Re-export public API
pub use types::{InitializationError, InputError};
