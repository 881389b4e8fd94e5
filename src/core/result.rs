//! Match result record

use serde::{Serialize, Serializer};
use std::fmt;

/// Index reported when no candidate matched
pub const NO_MATCH_INDEX: i64 = -1;

/// Best candidate found for one source text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchResult {
    /// Source text, exactly as given
    pub source: String,
    /// Best candidate text, empty when nothing matched
    pub candidate: String,
    /// Position of the candidate in the candidate list
    #[serde(serialize_with = "serialize_index")]
    pub index: Option<usize>,
    /// Similarity of the normalized forms, 0-100
    pub score: u8,
}

impl MatchResult {
    /// Result for a source with no candidate scoring above zero
    pub fn no_match(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            candidate: String::new(),
            index: None,
            score: 0,
        }
    }

    pub fn is_match(&self) -> bool {
        self.index.is_some()
    }

    /// Candidate index with the `-1` sentinel for "no match"
    pub fn index_or_sentinel(&self) -> i64 {
        self.index
            .and_then(|i| i64::try_from(i).ok())
            .unwrap_or(NO_MATCH_INDEX)
    }
}

impl fmt::Display for MatchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} ({}) :  {}%",
            self.source,
            self.candidate,
            self.index_or_sentinel(),
            self.score
        )
    }
}

fn serialize_index<S: Serializer>(index: &Option<usize>, serializer: S) -> Result<S::Ok, S::Error> {
    match index {
        Some(i) => serializer.serialize_u64(*i as u64),
        None => serializer.serialize_i64(NO_MATCH_INDEX),
    }
}
