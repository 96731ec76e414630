//! Token-ordered wildcard name pattern.
//!
//! A normalized name is split on whitespace into literal tokens; candidates
//! must contain those tokens in the same order, with arbitrary text between
//! and after them, anchored at the start. `"MARIA SILVA"` matches
//! `"MARIA DA SILVA SANTOS"` but not `"ANA MARIA SILVA"`.

use regex::{Regex, RegexBuilder};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PatternError {
    /// The name normalized to an empty string; there are no tokens to anchor
    /// on and a degenerate pattern would match every candidate.
    #[error("name is empty after normalization")]
    EmptyName,

    #[error("failed to compile name pattern: {0}")]
    Compile(#[from] regex::Error),
}

/// Compiled token-ordered wildcard pattern for one normalized name.
#[derive(Debug, Clone)]
pub struct NamePattern {
    regex: Regex,
}

impl NamePattern {
    /// Compile a pattern from an already-normalized name.
    ///
    /// # Errors
    ///
    /// Returns `PatternError::EmptyName` if the name has no tokens.
    pub fn build(normalized_name: &str) -> Result<Self, PatternError> {
        let tokens: Vec<String> = normalized_name
            .split_whitespace()
            .map(regex::escape)
            .collect();

        if tokens.is_empty() {
            return Err(PatternError::EmptyName);
        }

        // Anchored at the start; trailing text after the last token is fine.
        // Upstream normalization already uppercases both sides, the
        // case-insensitive flag is the second guarantee.
        let pattern = format!("^{}.*$", tokens.join(".*"));
        let regex = RegexBuilder::new(&pattern)
            .case_insensitive(true)
            .build()?;

        Ok(Self { regex })
    }

    /// Test a candidate's normalized name against this pattern.
    #[must_use]
    pub fn matches(&self, candidate_normalized: &str) -> bool {
        self.regex.is_match(candidate_normalized)
    }
}
