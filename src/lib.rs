//! Lemmatch Library
//!
//! Finds, for every text in one list, the most similar text in another list after
//! reducing both to base word forms.

pub mod analyzer;
pub mod core;
pub mod demo;
pub mod error;
pub mod input;
pub mod report;
pub mod utils;

pub use crate::analyzer::{create_analyzer, AnalyzerKind, MorphAnalyzer};
pub use crate::core::{match_all, MatchResult, Matcher, Normalizer};
pub use crate::error::{LemmatchError, LemmatchResult};
