//! CSV export of per-row results.
//!
//! One row per checked mapping with both sides flattened into columns, in the
//! order the caller provides (callers sort by row id first).

use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use csv::Writer;

use crate::evaluate::RowResult;
use crate::report::{is_problematic, problem_reason};

/// Exports results to CSV format.
///
/// # Arguments
///
/// * `results` - Row results, already sorted by row id
/// * `output` - Output file path (or stdout if None)
///
/// # Returns
///
/// Returns the number of records exported, or an error if export fails.
pub fn export_csv(results: &[RowResult], output: Option<&Path>) -> Result<usize> {
    // Use a trait object so the same writer handles both File and Stdout
    let mut writer: Writer<Box<dyn Write>> = if let Some(output_path) = output {
        let file = std::fs::File::create(output_path).context(format!(
            "Failed to create output file: {}",
            output_path.display()
        ))?;
        Writer::from_writer(Box::new(file) as Box<dyn Write>)
    } else {
        Writer::from_writer(Box::new(io::stdout()) as Box<dyn Write>)
    };

    writer.write_record([
        "csv_row",
        "redirect_from",
        "status_from_first",
        "status_from_final",
        "loop_from",
        "redirect_to",
        "status_to_first",
        "status_to_final",
        "loop_to",
        "has_loop",
        "problem",
    ])?;

    for row in results {
        let problem = if is_problematic(row) {
            problem_reason(row)
        } else {
            String::new()
        };
        writer.write_record([
            row.row_id.to_string(),
            row.from_url.clone(),
            format_status(row.from.first_status),
            format_status(row.from.final_status),
            row.from.is_loop.to_string(),
            row.to_url.clone(),
            format_status(row.to.first_status),
            format_status(row.to.final_status),
            row.to.is_loop.to_string(),
            row.has_loop.to_string(),
            problem,
        ])?;
    }

    writer.flush().context("Failed to flush CSV output")?;
    Ok(results.len())
}

/// Absent statuses export as empty cells, not as a sentinel value.
fn format_status(status: Option<u16>) -> String {
    status.map(|code| code.to_string()).unwrap_or_default()
}
