//! Renderers for the four output artifacts.
//!
//! The import file is machine-consumed (tab-separated, comma decimal per the
//! target report's locale); the other three are human-readable review logs
//! with a dash rule between entries (period decimal).

pub mod writer;

use crate::matching::engine::{AmbiguousMatch, ImportRow, PartialMatch};

/// Rule separating entries in the review logs.
const SEPARATOR: &str = "----------------------------------------";

/// Score as it appears in the import file: one decimal digit, comma
/// separator. `10` renders as `10,0`.
#[must_use]
pub fn import_score(score: f64) -> String {
    format!("{score:.1}").replace('.', ",")
}

/// Score as it appears in review logs: one decimal digit, period separator.
#[must_use]
pub fn diagnostic_score(score: f64) -> String {
    format!("{score:.1}")
}

/// Render the grade-import file: `{id}<TAB>{score}` per line, first-seen
/// source order.
#[must_use]
pub fn render_import(rows: &[ImportRow]) -> String {
    let mut out = String::new();
    for row in rows {
        out.push_str(&row.id);
        out.push('\t');
        out.push_str(&import_score(row.score));
        out.push('\n');
    }
    out
}

/// Render the ambiguity review log.
#[must_use]
pub fn render_ambiguities(entries: &[AmbiguousMatch]) -> String {
    let mut out = String::new();
    for entry in entries {
        out.push_str(&format!(
            "Grade sheet entry: '{}' (score: {})\n",
            entry.raw_name,
            diagnostic_score(entry.score)
        ));
        out.push_str("Possible roster matches (ambiguous):\n");
        for candidate in &entry.candidates {
            out.push_str(&format!(
                "- id: {}, name: '{}'\n",
                candidate.id, candidate.full_name
            ));
        }
        out.push_str(SEPARATOR);
        out.push_str("\n\n");
    }
    out
}

/// Render the partial-match review log.
#[must_use]
pub fn render_partials(entries: &[PartialMatch]) -> String {
    let mut out = String::new();
    for entry in entries {
        out.push_str(&format!(
            "Grade sheet entry: '{}' (score: {})\n",
            entry.raw_name,
            diagnostic_score(entry.score)
        ));
        out.push_str("Partial match in roster:\n");
        out.push_str(&format!(
            "- id: {}, name: '{}'\n",
            entry.candidate.id, entry.candidate.full_name
        ));
        out.push_str(SEPARATOR);
        out.push_str("\n\n");
    }
    out
}

/// Render the not-found list: one raw name per line.
#[must_use]
pub fn render_not_found(names: &[String]) -> String {
    let mut out = String::new();
    for name in names {
        out.push_str(name);
        out.push('\n');
    }
    out
}
