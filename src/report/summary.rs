//! Aggregate counts over a completed check run.

use serde::Serialize;

use crate::evaluate::RowResult;

/// True when `status` is present and inside `lo..=hi`.
///
/// Absent statuses (loop, truncation, transport failure) match no range.
fn status_in_range(status: Option<u16>, lo: u16, hi: u16) -> bool {
    status.is_some_and(|code| (lo..=hi).contains(&code))
}

/// Whether either side of the row answered with a redirect on its first hop.
pub fn is_redirect(row: &RowResult) -> bool {
    status_in_range(row.from.first_status, 300, 399)
        || status_in_range(row.to.first_status, 300, 399)
}

/// Whether the row needs human attention: a loop, or a 4xx/5xx final status
/// on either side.
pub fn is_problematic(row: &RowResult) -> bool {
    row.has_loop
        || status_in_range(row.from.final_status, 400, 599)
        || status_in_range(row.to.final_status, 400, 599)
}

/// Aggregate counts for a batch of row results.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CheckSummary {
    /// Number of rows checked.
    pub total_rows: usize,
    /// Rows where either side's first status was a 3xx.
    pub redirect_rows: usize,
    /// Rows where either side's chain looped.
    pub loop_rows: usize,
    /// Rows flagged by [`is_problematic`].
    pub problematic_rows: usize,
    /// Row ids of the problematic rows, in input order.
    pub problematic_row_ids: Vec<usize>,
}

/// Computes aggregate counts over already-resolved rows.
pub fn summarize(results: &[RowResult]) -> CheckSummary {
    let mut summary = CheckSummary {
        total_rows: results.len(),
        ..Default::default()
    };
    for row in results {
        if is_redirect(row) {
            summary.redirect_rows += 1;
        }
        if row.has_loop {
            summary.loop_rows += 1;
        }
        if is_problematic(row) {
            summary.problematic_rows += 1;
            summary.problematic_row_ids.push(row.row_id);
        }
    }
    summary
}
