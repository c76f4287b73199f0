//! Per-chunk extraction outcomes

use std::collections::BTreeMap;

/// The result of extracting one chunk.
///
/// A chunk either yields a flat field-to-value mapping (possibly empty when
/// none of the canonical fields appear in the chunk) or a parse failure when
/// the service replied with something that is not the expected structure.
/// Transport-level failures never produce an outcome; those chunks are
/// skipped entirely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChunkOutcome {
    /// A flat mapping from canonical field name to raw string value.
    Fields(BTreeMap<String, String>),

    /// The reply could not be parsed as a flat key/value structure.
    ParseFailure {
        /// Human-readable reason, folded into the record under the
        /// reserved failure key.
        reason: String,
    },
}

impl ChunkOutcome {
    /// Build a fields outcome from an iterator of pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        ChunkOutcome::Fields(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Whether this outcome carries no usable field values.
    pub fn is_empty(&self) -> bool {
        match self {
            ChunkOutcome::Fields(map) => map.is_empty(),
            ChunkOutcome::ParseFailure { .. } => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_pairs() {
        let outcome = ChunkOutcome::from_pairs([("WALA", "24")]);
        match outcome {
            ChunkOutcome::Fields(map) => {
                assert_eq!(map.get("WALA").map(String::as_str), Some("24"));
            }
            _ => panic!("expected Fields"),
        }
    }

    #[test]
    fn test_is_empty() {
        assert!(ChunkOutcome::from_pairs(Vec::<(String, String)>::new()).is_empty());
        assert!(!ChunkOutcome::from_pairs([("a", "b")]).is_empty());
        assert!(ChunkOutcome::ParseFailure {
            reason: "bad json".to_string()
        }
        .is_empty());
    }
}
