//! Core matching modules
//!
//! Contains text normalization, the best-match search, and its result type.

pub mod matcher;
pub mod normalizer;
pub mod result;

pub use matcher::{match_all, Matcher, Matches};
pub use normalizer::Normalizer;
pub use result::MatchResult;
