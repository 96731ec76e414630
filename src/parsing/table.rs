//! CSV readers for the grade sheet and the roster.
//!
//! Both inputs are read headerless: header or preamble rows of the grade
//! sheet fail score coercion and drop out naturally, or can be skipped
//! explicitly with `skip_rows` for exports that carry a fixed preamble.

use std::path::Path;

use tracing::debug;

use crate::core::types::{GradeRow, RosterEntry};
use crate::parsing::ParseError;

/// Parsed grade sheet: the usable rows plus how many were dropped because
/// their score could not be coerced to a decimal number.
#[derive(Debug, Clone, Default)]
pub struct GradeSheet {
    pub rows: Vec<GradeRow>,
    pub dropped_rows: usize,
}

/// Coerce a score cell to a decimal number, accepting comma as the decimal
/// separator. Returns `None` for anything non-numeric.
#[must_use]
pub fn coerce_score(cell: &str) -> Option<f64> {
    let value: f64 = cell.trim().replace(',', ".").parse().ok()?;
    value.is_finite().then_some(value)
}

/// Read the grade sheet from a CSV file.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, or `ParseError::Csv`
/// if the content is not valid CSV.
pub fn parse_grade_file(
    path: &Path,
    score_column: usize,
    skip_rows: usize,
) -> Result<GradeSheet, ParseError> {
    let content = std::fs::read_to_string(path)?;
    parse_grade_text(&content, score_column, skip_rows)
}

/// Read the grade sheet from CSV text. Column 0 is the student name; the
/// score comes from `score_column`. Rows without a coercible score are
/// dropped silently (counted, logged at debug).
///
/// # Errors
///
/// Returns `ParseError::Csv` if the content is not valid CSV.
pub fn parse_grade_text(
    text: &str,
    score_column: usize,
    skip_rows: usize,
) -> Result<GradeSheet, ParseError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut sheet = GradeSheet::default();

    for (i, record) in reader.records().enumerate() {
        let record = record?;
        if i < skip_rows {
            continue;
        }

        let raw_name = record.get(0).unwrap_or("").to_string();
        let Some(score) = record.get(score_column).and_then(coerce_score) else {
            debug!("dropping row {} without a coercible score: {raw_name:?}", i + 1);
            sheet.dropped_rows += 1;
            continue;
        };

        sheet.rows.push(GradeRow { raw_name, score });
    }

    Ok(sheet)
}

/// Read the roster from a CSV file.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, or other parse
/// errors if the content is invalid.
pub fn parse_roster_file(path: &Path) -> Result<Vec<RosterEntry>, ParseError> {
    let content = std::fs::read_to_string(path)?;
    parse_roster_text(&content)
}

/// Read the roster from CSV text: column 0 is the identifier (kept as text),
/// column 1 the full name.
///
/// # Errors
///
/// Returns `ParseError::InvalidFormat` if a row has fewer than 2 fields or
/// no entries are found.
pub fn parse_roster_text(text: &str) -> Result<Vec<RosterEntry>, ParseError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut entries = Vec::new();

    for (i, record) in reader.records().enumerate() {
        let record = record?;
        // Line numbers in errors are 1-based for user friendliness
        let line_num = i + 1;

        let (Some(id), Some(full_name)) = (record.get(0), record.get(1)) else {
            return Err(ParseError::InvalidFormat(format!(
                "roster line {line_num} has fewer than 2 fields"
            )));
        };

        entries.push(RosterEntry {
            id: id.trim().to_string(),
            full_name: full_name.trim().to_string(),
        });
    }

    if entries.is_empty() {
        return Err(ParseError::InvalidFormat(
            "no roster entries found".to_string(),
        ));
    }

    Ok(entries)
}
