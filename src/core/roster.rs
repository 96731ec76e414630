//! Roster storage with pre-normalized names.
//!
//! Normalizing each roster name once at load time, rather than once per
//! comparison, keeps the main matching loop linear in the roster size.

use std::collections::HashMap;

use crate::core::normalize::normalize;
use crate::core::types::RosterEntry;

/// The master student roster, with each entry's normalized name cached.
///
/// Entries keep their original order and are never deduplicated; two entries
/// sharing a normalized name simply both show up as candidates (and the run
/// classifies such source names as ambiguous).
#[derive(Debug, Clone)]
pub struct Roster {
    entries: Vec<RosterEntry>,

    /// Normalized full names, parallel to `entries`
    normalized: Vec<String>,
}

impl Roster {
    /// Build a roster from parsed entries, normalizing each name once.
    #[must_use]
    pub fn from_entries(entries: Vec<RosterEntry>) -> Self {
        let normalized = entries.iter().map(|e| normalize(&e.full_name)).collect();
        Self {
            entries,
            normalized,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn entries(&self) -> &[RosterEntry] {
        &self.entries
    }

    /// Iterate entries together with their cached normalized names.
    pub fn iter(&self) -> impl Iterator<Item = (&RosterEntry, &str)> {
        self.entries
            .iter()
            .zip(self.normalized.iter().map(String::as_str))
    }

    /// Entry and normalized name at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<(&RosterEntry, &str)> {
        Some((self.entries.get(index)?, self.normalized.get(index)?))
    }

    /// Groups of entries that share a normalized name, in first-seen order.
    ///
    /// The engine never deduplicates the roster; this is the inspection
    /// surface that lets an operator find collisions before a run.
    #[must_use]
    pub fn normalized_collisions(&self) -> Vec<(String, Vec<&RosterEntry>)> {
        let mut by_name: HashMap<&str, Vec<usize>> = HashMap::new();
        for (i, name) in self.normalized.iter().enumerate() {
            by_name.entry(name.as_str()).or_default().push(i);
        }

        let mut seen = std::collections::HashSet::new();
        let mut collisions = Vec::new();
        for name in &self.normalized {
            if !seen.insert(name.as_str()) {
                continue;
            }
            let indices = &by_name[name.as_str()];
            if indices.len() > 1 {
                collisions.push((
                    name.clone(),
                    indices.iter().map(|&i| &self.entries[i]).collect(),
                ));
            }
        }
        collisions
    }
}
