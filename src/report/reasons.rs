//! Human-readable explanations for problematic rows.

use crate::evaluate::RowResult;

/// Describes a 4xx/5xx final status for one side of the row, if any.
fn error_class(final_status: Option<u16>, side: &str) -> Option<String> {
    match final_status {
        Some(code) if (400..=499).contains(&code) => {
            Some(format!("{side} URL answers with a client error (4xx)"))
        }
        Some(code) if (500..=599).contains(&code) => {
            Some(format!("{side} URL answers with a server error (5xx)"))
        }
        _ => None,
    }
}

/// Explains why a row was flagged problematic.
///
/// Joins every applicable reason with " + ". Falls back to an "unclassified"
/// note when a row was flagged but none of the standard reasons apply, so the
/// report never shows a flagged row without an explanation.
pub fn problem_reason(row: &RowResult) -> String {
    let mut reasons: Vec<String> = Vec::new();
    if row.has_loop {
        reasons.push("redirect loop (chain returns to an earlier address)".to_string());
    }
    if let Some(reason) = error_class(row.from.final_status, "origin") {
        reasons.push(reason);
    }
    if let Some(reason) = error_class(row.to.final_status, "destination") {
        reasons.push(reason);
    }

    if reasons.is_empty() {
        return "unclassified anomaly (check manually)".to_string();
    }
    reasons.join(" + ")
}
