//! Resolution outcome types.

use serde::Serialize;

/// One visited address and the status code its request returned.
///
/// Hops are appended to the chain in visit order and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hop {
    /// The address that was requested.
    pub address: String,
    /// HTTP status code returned for this address, absent if the request
    /// failed before a status was available.
    pub status: Option<u16>,
}

/// The resolver's result for one starting address.
///
/// Invariants:
/// - `first_status` is set as soon as any hop completes.
/// - `final_status` is set only when the chain terminates on a non-3xx status
///   or on a 3xx status with no usable redirect target.
/// - `is_loop` is true iff an already-visited address was about to be
///   requested again; the repeated hop itself is not part of `chain`.
///
/// A truncated chain (hop budget exhausted without a repeat) has
/// `final_status: None` and `is_loop: false`, which keeps it distinguishable
/// from a loop.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ResolutionOutcome {
    /// Status code of the very first hop, absent if the input was blank or
    /// the resolution failed at the transport level.
    pub first_status: Option<u16>,
    /// Status code of the terminating hop, absent on loop, truncation, or
    /// transport failure.
    pub final_status: Option<u16>,
    /// Whether the chain revisited one of its own addresses.
    pub is_loop: bool,
    /// Every hop completed during this resolution, in visit order.
    pub chain: Vec<Hop>,
}

impl ResolutionOutcome {
    /// The fully absent outcome: blank input or transport failure before any
    /// hop completed.
    pub fn absent() -> Self {
        Self::default()
    }
}
