//! The accumulated record and its fold rule

use crate::outcome::ChunkOutcome;
use std::collections::BTreeMap;

/// Reserved key under which a parse failure is recorded.
///
/// A value under this key always overwrites, so an inconsistent signal from
/// any chunk stays visible downstream. One malformed chunk reply can
/// therefore erase a previously recorded value under this key; the
/// overwrite is deliberate.
pub const PARSE_FAILURE_KEY: &str = "error";

/// The merged result of all chunk extractions for one document.
///
/// Built by folding [`ChunkOutcome`]s in strict chunk-index order. After the
/// fold completes, each field holds exactly one resolved string; conflicting
/// observations are concatenated rather than discarded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccumulatedRecord {
    values: BTreeMap<String, String>,
}

impl AccumulatedRecord {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one chunk's outcome into the record.
    ///
    /// For each incoming `(key, value)` pair:
    /// - absent key, or the reserved failure key: insert/overwrite;
    /// - present key with a textually different value: append as
    ///   `existing + "; " + value`;
    /// - present key with an identical value: no-op.
    ///
    /// Chunks must be folded in index order; the rule above determines which
    /// of two conflicting observations appears first.
    pub fn fold(&mut self, outcome: &ChunkOutcome) {
        match outcome {
            ChunkOutcome::Fields(map) => {
                for (key, value) in map {
                    self.fold_pair(key, value);
                }
            }
            ChunkOutcome::ParseFailure { reason } => {
                self.fold_pair(PARSE_FAILURE_KEY, reason);
            }
        }
    }

    fn fold_pair(&mut self, key: &str, value: &str) {
        if key == PARSE_FAILURE_KEY {
            self.values.insert(key.to_string(), value.to_string());
            return;
        }
        match self.values.get_mut(key) {
            None => {
                self.values.insert(key.to_string(), value.to_string());
            }
            Some(existing) if existing.as_str() != value => {
                existing.push_str("; ");
                existing.push_str(value);
            }
            Some(_) => {} // identical observation, keep the first
        }
    }

    /// Resolved value for a field, if any chunk produced one.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.values.get(field).map(String::as_str)
    }

    /// Iterate over `(field, value)` pairs in field-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of resolved fields.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no field has a resolved value.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
