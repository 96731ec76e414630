use serde::Serialize;

/// One row of the class grade sheet: the name as a human typed it, plus the
/// score from the selected column.
#[derive(Debug, Clone, PartialEq)]
pub struct GradeRow {
    /// Name exactly as entered in the sheet (pre-normalization spelling)
    pub raw_name: String,

    /// Score, already coerced to a decimal number
    pub score: f64,
}

impl GradeRow {
    pub fn new(raw_name: impl Into<String>, score: f64) -> Self {
        Self {
            raw_name: raw_name.into(),
            score,
        }
    }
}

/// One entry of the master student roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RosterEntry {
    /// Opaque identifier used as the join key in the import output.
    /// Kept as text, never parsed as a number.
    pub id: String,

    /// Full name as it appears in the roster
    pub full_name: String,
}

impl RosterEntry {
    pub fn new(id: impl Into<String>, full_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            full_name: full_name.into(),
        }
    }
}

/// A roster entry whose name satisfied the pattern for some source name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Candidate {
    pub id: String,
    pub full_name: String,
}

impl From<&RosterEntry> for Candidate {
    fn from(entry: &RosterEntry) -> Self {
        Self {
            id: entry.id.clone(),
            full_name: entry.full_name.clone(),
        }
    }
}

/// Classification of a single unique source name against the roster.
///
/// Exactly one outcome is produced per unique normalized source name.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "bucket", rename_all = "snake_case")]
pub enum MatchOutcome {
    /// Exact name equality with a unique roster candidate
    Matched { id: String, score: f64 },

    /// A unique roster candidate's normalized name strictly extends the
    /// source name (the sheet name is a truncation of it)
    PartialMatched {
        id: String,
        score: f64,
        matched_full_name: String,
    },

    /// Pattern matched more than one roster candidate; needs manual review
    Ambiguous {
        candidates: Vec<Candidate>,
        score: f64,
    },

    /// Pattern matched zero candidates, or a single candidate that is
    /// neither equal to the source name nor a strict extension of it
    NotFound { raw_name: String },
}

impl MatchOutcome {
    /// Short bucket label for display
    #[must_use]
    pub fn bucket_name(&self) -> &'static str {
        match self {
            Self::Matched { .. } => "matched",
            Self::PartialMatched { .. } => "partial",
            Self::Ambiguous { .. } => "ambiguous",
            Self::NotFound { .. } => "not_found",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_name() {
        let outcome = MatchOutcome::Matched {
            id: "001".into(),
            score: 8.0,
        };
        assert_eq!(outcome.bucket_name(), "matched");

        let outcome = MatchOutcome::NotFound {
            raw_name: "PEDRO".into(),
        };
        assert_eq!(outcome.bucket_name(), "not_found");
    }

    #[test]
    fn test_candidate_from_entry() {
        let entry = RosterEntry::new("042", "ANA LUIZA");
        let candidate = Candidate::from(&entry);
        assert_eq!(candidate.id, "042");
        assert_eq!(candidate.full_name, "ANA LUIZA");
    }
}
