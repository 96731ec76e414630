//! The reconciliation engine.
//!
//! Walks the grade sheet in order, deduplicates repeated names, matches each
//! unique name against the pre-normalized roster, and routes every record
//! into exactly one of four buckets: matched, partial, ambiguous, not found.

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::core::normalize::normalize;
use crate::core::roster::Roster;
use crate::core::types::{Candidate, GradeRow, MatchOutcome};
use crate::matching::pattern::NamePattern;

#[derive(Error, Debug)]
pub enum ReconError {
    /// The grade sheet yielded zero rows with a coercible score; there is
    /// nothing to reconcile and no artifacts should be produced.
    #[error("no grade rows with a valid score to reconcile")]
    EmptyInput,
}

/// Progress notifications emitted during a run.
///
/// The engine is a single synchronous computation; a caller that needs a
/// responsive display runs it on a worker and renders these events however
/// it likes. Emitted between records only, never mid-record.
#[derive(Debug, Clone, Copy)]
pub enum ProgressEvent<'a> {
    /// Source rows loaded and about to be processed
    SourceLoaded { rows: usize },
    /// Roster pre-pass done (normalized names cached)
    RosterReady { entries: usize },
    /// One unique source record classified
    Record {
        index: usize,
        total: usize,
        raw_name: &'a str,
    },
}

/// One line of the grade-import output: roster id plus the score to import.
/// Produced by exact and partial matches alike, in first-seen source order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImportRow {
    pub id: String,
    pub score: f64,
}

/// Diagnostic record for a partial (truncated-name) match.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PartialMatch {
    pub raw_name: String,
    pub score: f64,
    pub candidate: Candidate,
}

/// Diagnostic record for an ambiguous match.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AmbiguousMatch {
    pub raw_name: String,
    pub score: f64,
    pub candidates: Vec<Candidate>,
}

/// Counts for one reconciliation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub source_rows: usize,
    pub unique_names: usize,
    pub duplicates_skipped: usize,
    pub empty_names_skipped: usize,
    pub matched: usize,
    pub partial: usize,
    pub ambiguous: usize,
    pub not_found: usize,
}

/// The four output collections plus run counts.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunOutcome {
    /// Grade-import lines (exact + partial matches), first-seen source order
    pub import_rows: Vec<ImportRow>,
    /// Partial matches needing review
    pub partial: Vec<PartialMatch>,
    /// Ambiguous matches needing manual resolution
    pub ambiguous: Vec<AmbiguousMatch>,
    /// Raw names with no usable roster match, first-seen source order
    pub not_found: Vec<String>,
    pub summary: RunSummary,
}

/// Matches grade rows against a roster and classifies each unique name.
///
/// Holds no mutable state; every call to [`Reconciler::reconcile`] operates
/// on its own output collections, so a roster can be shared across runs.
pub struct Reconciler<'a> {
    roster: &'a Roster,
}

impl<'a> Reconciler<'a> {
    #[must_use]
    pub fn new(roster: &'a Roster) -> Self {
        Self { roster }
    }

    /// Classify one name against the roster.
    ///
    /// Returns `None` when the name normalizes to an empty string; such
    /// records are skipped rather than matched against a degenerate pattern.
    #[must_use]
    pub fn classify(&self, raw_name: &str, score: f64) -> Option<MatchOutcome> {
        let normalized = normalize(raw_name);
        let pattern = match NamePattern::build(&normalized) {
            Ok(p) => p,
            Err(_) => {
                warn!("skipping record with empty name: {raw_name:?}");
                return None;
            }
        };

        let candidates: Vec<_> = self
            .roster
            .iter()
            .filter(|(_, roster_name)| pattern.matches(roster_name))
            .collect();

        Some(match candidates.as_slice() {
            [] => MatchOutcome::NotFound {
                raw_name: raw_name.to_string(),
            },
            [(entry, roster_name)] => {
                if *roster_name == normalized {
                    MatchOutcome::Matched {
                        id: entry.id.clone(),
                        score,
                    }
                } else if roster_name.starts_with(&normalized)
                    && roster_name.len() > normalized.len()
                {
                    MatchOutcome::PartialMatched {
                        id: entry.id.clone(),
                        score,
                        matched_full_name: entry.full_name.clone(),
                    }
                } else {
                    // A single hit that is neither exact nor a strict
                    // extension of the source name is not a usable match.
                    MatchOutcome::NotFound {
                        raw_name: raw_name.to_string(),
                    }
                }
            }
            many => MatchOutcome::Ambiguous {
                candidates: many.iter().map(|(entry, _)| Candidate::from(*entry)).collect(),
                score,
            },
        })
    }

    /// Run reconciliation over the grade sheet.
    ///
    /// # Errors
    ///
    /// Returns `ReconError::EmptyInput` if `rows` is empty.
    pub fn reconcile(&self, rows: &[GradeRow]) -> Result<RunOutcome, ReconError> {
        self.reconcile_with_progress(rows, |_| {})
    }

    /// Like [`Reconciler::reconcile`], invoking `progress` as the run
    /// advances.
    ///
    /// # Errors
    ///
    /// Returns `ReconError::EmptyInput` if `rows` is empty.
    pub fn reconcile_with_progress(
        &self,
        rows: &[GradeRow],
        mut progress: impl FnMut(ProgressEvent<'_>),
    ) -> Result<RunOutcome, ReconError> {
        if rows.is_empty() {
            return Err(ReconError::EmptyInput);
        }

        progress(ProgressEvent::SourceLoaded { rows: rows.len() });
        progress(ProgressEvent::RosterReady {
            entries: self.roster.len(),
        });

        let mut outcome = RunOutcome {
            summary: RunSummary {
                source_rows: rows.len(),
                ..RunSummary::default()
            },
            ..RunOutcome::default()
        };

        // First occurrence of a normalized name wins; later duplicates are
        // skipped entirely and contribute to no bucket.
        let mut seen = std::collections::HashSet::new();

        let total = rows.len();
        for (index, row) in rows.iter().enumerate() {
            progress(ProgressEvent::Record {
                index,
                total,
                raw_name: &row.raw_name,
            });

            let normalized = normalize(&row.raw_name);
            if normalized.is_empty() {
                warn!("skipping row {index} with empty name: {:?}", row.raw_name);
                outcome.summary.empty_names_skipped += 1;
                continue;
            }
            if !seen.insert(normalized) {
                debug!("skipping duplicate name: {:?}", row.raw_name);
                outcome.summary.duplicates_skipped += 1;
                continue;
            }
            outcome.summary.unique_names += 1;

            match self.classify(&row.raw_name, row.score) {
                Some(MatchOutcome::Matched { id, score }) => {
                    outcome.summary.matched += 1;
                    outcome.import_rows.push(ImportRow { id, score });
                }
                Some(MatchOutcome::PartialMatched {
                    id,
                    score,
                    matched_full_name,
                }) => {
                    outcome.summary.partial += 1;
                    outcome.import_rows.push(ImportRow {
                        id: id.clone(),
                        score,
                    });
                    outcome.partial.push(PartialMatch {
                        raw_name: row.raw_name.clone(),
                        score,
                        candidate: Candidate {
                            id,
                            full_name: matched_full_name,
                        },
                    });
                }
                Some(MatchOutcome::Ambiguous { candidates, score }) => {
                    outcome.summary.ambiguous += 1;
                    outcome.ambiguous.push(AmbiguousMatch {
                        raw_name: row.raw_name.clone(),
                        score,
                        candidates,
                    });
                }
                Some(MatchOutcome::NotFound { raw_name }) => {
                    outcome.summary.not_found += 1;
                    outcome.not_found.push(raw_name);
                }
                // Empty after normalization was already handled above, but
                // classify() re-checks for callers that use it directly.
                None => {
                    outcome.summary.empty_names_skipped += 1;
                }
            }
        }

        Ok(outcome)
    }
}
