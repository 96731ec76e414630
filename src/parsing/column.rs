//! Score-column selection by spreadsheet letter.

use crate::parsing::ParseError;

/// Convert a spreadsheet column letter to a 0-based index: A→0 … Z→25.
///
/// Case-insensitive. Anything other than exactly one ASCII letter is
/// rejected before any file is opened.
///
/// # Errors
///
/// Returns `ParseError::InvalidColumnSpecifier` for multi-character input,
/// digits, or non-ASCII letters.
pub fn score_column_index(letter: &str) -> Result<usize, ParseError> {
    let trimmed = letter.trim();
    let mut chars = trimmed.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphabetic() => {
            Ok(c.to_ascii_uppercase() as usize - 'A' as usize)
        }
        _ => Err(ParseError::InvalidColumnSpecifier(letter.to_string())),
    }
}
