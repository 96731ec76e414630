//! Name matching: the token-ordered wildcard pattern and the reconciliation
//! engine that applies it to a roster.

pub mod engine;
pub mod pattern;

pub use engine::{Reconciler, ReconError, RunOutcome, RunSummary};
pub use pattern::NamePattern;
