//! Input parsing: reading redirect mappings from a CSV file.
//!
//! The from/to columns are recognized even when the headers are written
//! slightly differently ("Redirect From", "redirect_from", "from", ...), so
//! exports from different migration tools work without renaming columns.

use std::path::Path;

use log::warn;

use crate::config::{HEADER_ROW_OFFSET, MAX_ROWS_PER_RUN};
use crate::error_handling::InputError;

/// One parsed mapping row: a "from" address that should redirect to a "to"
/// address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectMapping {
    /// CSV row number in the source file (header = row 1).
    pub row_id: usize,
    /// The migration's source address.
    pub from_url: String,
    /// The migration's target address.
    pub to_url: String,
}

/// Normalizes a header name for column matching: trims, lowercases, and
/// strips spaces and underscores.
fn normalize_column(name: &str) -> String {
    name.trim().to_lowercase().replace([' ', '_'], "")
}

/// Finds the from/to column indexes in the header record.
fn detect_columns(headers: &csv::StringRecord) -> Result<(usize, usize), InputError> {
    let mut from_col = None;
    let mut to_col = None;
    for (index, name) in headers.iter().enumerate() {
        let normalized = normalize_column(name);
        if normalized.contains("redirectfrom") || normalized == "from" {
            from_col = Some(index);
        }
        if normalized.contains("redirectto") || normalized == "to" {
            to_col = Some(index);
        }
    }
    match (from_col, to_col) {
        (Some(from), Some(to)) => Ok((from, to)),
        _ => Err(InputError::ColumnsNotFound),
    }
}

/// Reads redirect mappings from a CSV file.
///
/// Row ids are assigned as the zero-based record index plus the header
/// offset, so they match row numbers in the source file (header = row 1).
///
/// At most [`MAX_ROWS_PER_RUN`] rows are kept per run; `limit` restricts the
/// run further. Excess rows are dropped with a warning rather than failing
/// the whole run.
///
/// # Errors
///
/// Returns [`InputError`] if the file cannot be read, is not valid CSV, or
/// has no recognizable from/to columns.
pub fn read_mappings(path: &Path, limit: Option<usize>) -> Result<Vec<RedirectMapping>, InputError> {
    let mut reader = csv::Reader::from_path(path)?;
    let (from_col, to_col) = detect_columns(reader.headers()?)?;

    let cap = limit.unwrap_or(MAX_ROWS_PER_RUN).min(MAX_ROWS_PER_RUN);
    let mut mappings = Vec::new();
    let mut skipped = 0usize;
    for (index, record) in reader.records().enumerate() {
        let record = record?;
        if mappings.len() >= cap {
            skipped += 1;
            continue;
        }
        mappings.push(RedirectMapping {
            row_id: index + HEADER_ROW_OFFSET,
            from_url: record.get(from_col).unwrap_or("").to_string(),
            to_url: record.get(to_col).unwrap_or("").to_string(),
        });
    }
    if skipped > 0 {
        warn!("Input has {skipped} more rows than the {cap} row limit for this run; they were skipped");
    }
    Ok(mappings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(contents.as_bytes())
            .expect("Failed to write fixture");
        file
    }

    #[test]
    fn test_reads_canonical_headers() {
        let file = write_csv(
            "Redirect from,Redirect to\n\
             https://a.example/old,https://a.example/new\n\
             https://b.example/old,https://b.example/new\n",
        );
        let mappings = read_mappings(file.path(), None).expect("Parse failed");
        assert_eq!(mappings.len(), 2);
        assert_eq!(mappings[0].row_id, 2);
        assert_eq!(mappings[0].from_url, "https://a.example/old");
        assert_eq!(mappings[1].row_id, 3);
        assert_eq!(mappings[1].to_url, "https://b.example/new");
    }

    #[test]
    fn test_header_variants_are_recognized() {
        let file = write_csv(
            " redirect_FROM ,REDIRECT TO\n\
             https://a.example/old,https://a.example/new\n",
        );
        let mappings = read_mappings(file.path(), None).expect("Parse failed");
        assert_eq!(mappings.len(), 1);
        assert_eq!(mappings[0].from_url, "https://a.example/old");
        assert_eq!(mappings[0].to_url, "https://a.example/new");
    }

    #[test]
    fn test_bare_from_to_headers() {
        let file = write_csv("from,to\n/old,/new\n");
        let mappings = read_mappings(file.path(), None).expect("Parse failed");
        assert_eq!(mappings.len(), 1);
    }

    #[test]
    fn test_missing_columns_is_an_error() {
        let file = write_csv("source,destination\n/old,/new\n");
        let err = read_mappings(file.path(), None).expect_err("Should fail");
        assert!(matches!(err, InputError::ColumnsNotFound));
    }

    #[test]
    fn test_row_id_matches_source_file_numbering() {
        let rows: String = (0..10)
            .map(|i| format!("https://example.com/old{i},https://example.com/new{i}\n"))
            .collect();
        let file = write_csv(&format!("Redirect from,Redirect to\n{rows}"));
        let mappings = read_mappings(file.path(), None).expect("Parse failed");
        // Zero-based index 5 is row 7 in the file (header = row 1)
        assert_eq!(mappings[5].row_id, 7);
        assert_eq!(mappings[5].from_url, "https://example.com/old5");
    }

    #[test]
    fn test_limit_caps_rows() {
        let rows: String = (0..10)
            .map(|i| format!("https://example.com/old{i},https://example.com/new{i}\n"))
            .collect();
        let file = write_csv(&format!("Redirect from,Redirect to\n{rows}"));
        let mappings = read_mappings(file.path(), Some(3)).expect("Parse failed");
        assert_eq!(mappings.len(), 3);
        assert_eq!(mappings.last().map(|m| m.row_id), Some(4));
    }

    #[test]
    fn test_empty_cells_are_kept_as_blank_addresses() {
        // Blank addresses are a resolver concern (they resolve to the absent
        // outcome), not an input error
        let file = write_csv("Redirect from,Redirect to\n,https://a.example/new\n");
        let mappings = read_mappings(file.path(), None).expect("Parse failed");
        assert_eq!(mappings[0].from_url, "");
    }
}
