//! Row evaluation: resolving both sides of one redirect mapping.
//!
//! A mapping row pairs a "from" address with a "to" address. Evaluation
//! resolves both and merges the two outcomes into a single [`RowResult`]
//! tagged with the originating CSV row number. This layer never fails:
//! resolver failures are already represented as absent statuses.

use serde::Serialize;

use crate::resolve::{resolve, ResolutionOutcome};

/// The combined outcome for one input mapping row.
///
/// Immutable once built; rows are collected out of order under concurrency
/// and re-sorted by `row_id` before presentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowResult {
    /// CSV row number in the source file (header = row 1).
    pub row_id: usize,
    /// The raw "from" address as read from the input.
    pub from_url: String,
    /// The raw "to" address as read from the input.
    pub to_url: String,
    /// Resolution outcome for the "from" address.
    pub from: ResolutionOutcome,
    /// Resolution outcome for the "to" address.
    pub to: ResolutionOutcome,
    /// True when either side's chain looped.
    pub has_loop: bool,
}

/// Evaluates one mapping row by resolving both of its addresses.
///
/// The two resolutions are independent and run concurrently; their relative
/// order is never observable in the result.
pub async fn evaluate_row(
    client: &reqwest::Client,
    row_id: usize,
    from_url: &str,
    to_url: &str,
    max_hops: usize,
) -> RowResult {
    let (from, to) = tokio::join!(
        resolve(client, from_url, max_hops),
        resolve(client, to_url, max_hops),
    );
    let has_loop = from.is_loop || to.is_loop;
    RowResult {
        row_id,
        from_url: from_url.to_string(),
        to_url: to_url.to_string(),
        from,
        to,
        has_loop,
    }
}
