//! # grade-recon
//!
//! A library for reconciling class grade sheets against a master student
//! roster by fuzzy name matching.
//!
//! Grade sheets are filled in by hand: names arrive with missing accents,
//! truncated surnames, or extra middle names. `grade-recon` maps each
//! free-text name to a canonical roster identifier and produces a
//! grade-import file keyed by student ID.
//!
//! ## How matching works
//!
//! - Names are normalized (accent-folded, trimmed, uppercased) before any
//!   comparison.
//! - A name becomes a token-ordered wildcard pattern: its whitespace tokens
//!   must appear in the same order in a candidate, anchored at the start,
//!   with arbitrary text between and after them.
//! - Each unique source name lands in exactly one bucket:
//!   - **Matched**: exact name equality with a unique roster candidate
//!   - **Partial**: a unique candidate's name strictly extends the
//!     (typically truncated) sheet name
//!   - **Ambiguous**: several candidates; left for manual review
//!   - **Not found**: no usable match
//!
//! There is deliberately no edit-distance or phonetic matching; output
//! compatibility with prior runs depends on this policy.
//!
//! ## Example
//!
//! ```rust
//! use grade_recon::{GradeRow, Reconciler, Roster, RosterEntry};
//!
//! let roster = Roster::from_entries(vec![
//!     RosterEntry::new("001", "MARIA DA SILVA"),
//!     RosterEntry::new("003", "JOAO PEREIRA DOS SANTOS"),
//! ]);
//!
//! let engine = Reconciler::new(&roster);
//! let outcome = engine
//!     .reconcile(&[GradeRow::new("João Pereira", 6.5)])
//!     .unwrap();
//!
//! // A unique roster name strictly extends the sheet name: partial match
//! assert_eq!(outcome.import_rows[0].id, "003");
//! assert_eq!(outcome.summary.partial, 1);
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Grade rows, roster entries, outcomes, and normalization
//! - [`matching`]: The name pattern and the reconciliation engine
//! - [`parsing`]: CSV readers for the two input tables
//! - [`report`]: Artifact renderers and the overwrite/append writers
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod core;
pub mod matching;
pub mod parsing;
pub mod report;

// Re-export commonly used types for convenience
pub use core::normalize::normalize;
pub use core::roster::Roster;
pub use core::types::{Candidate, GradeRow, MatchOutcome, RosterEntry};
pub use matching::engine::{Reconciler, RunOutcome, RunSummary};
pub use matching::pattern::NamePattern;
