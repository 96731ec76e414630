//! Name normalization: the single canonical form every comparison uses.
//!
//! A normalized name is accent-folded, trimmed, has internal whitespace runs
//! collapsed to single spaces, and is uppercased. Both sides of every
//! comparison (sheet names and roster names) pass through [`normalize`], so
//! `"José  da Silva "` and `"JOSE DA SILVA"` are the same name.

/// Fold one character's accent away, if it carries one.
///
/// Covers the Latin accented vowels and cedilla that occur in the names this
/// tool reconciles; anything else passes through unchanged.
fn fold_char(c: char) -> char {
    match c {
        'á' | 'à' | 'â' | 'ã' | 'ä' => 'a',
        'Á' | 'À' | 'Â' | 'Ã' | 'Ä' => 'A',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'É' | 'È' | 'Ê' | 'Ë' => 'E',
        'í' | 'ì' | 'î' | 'ï' => 'i',
        'Í' | 'Ì' | 'Î' | 'Ï' => 'I',
        'ó' | 'ò' | 'ô' | 'õ' | 'ö' => 'o',
        'Ó' | 'Ò' | 'Ô' | 'Õ' | 'Ö' => 'O',
        'ú' | 'ù' | 'û' | 'ü' => 'u',
        'Ú' | 'Ù' | 'Û' | 'Ü' => 'U',
        'ç' => 'c',
        'Ç' => 'C',
        _ => c,
    }
}

/// Replace accented characters with their unaccented counterparts.
#[must_use]
pub fn fold_accents(input: &str) -> String {
    input.chars().map(fold_char).collect()
}

/// Canonical form of a name: accents folded, whitespace trimmed and
/// collapsed, uppercased.
///
/// Idempotent: `normalize(normalize(s)) == normalize(s)`. An all-whitespace
/// input normalizes to the empty string.
#[must_use]
pub fn normalize(name: &str) -> String {
    fold_accents(name)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_uppercase()
}
