//! Morphological Analyzer Module
//!
//! Provides the word -> base form lookup used by the normalizer:
//! - Builtin: Russian form -> lemma table compiled into the crate
//! - Dictionary: form -> lemma table loaded from a file

pub mod dictionary;

use crate::error::{LemmatchError, LemmatchResult};
use std::borrow::Cow;
use std::path::Path;

// Re-export main types
pub use dictionary::LemmaDictionary;

/// Trait for morphological analyzers
///
/// Implementations are read-only after construction, so a single instance can be
/// built once and shared by reference across any number of normalize calls.
pub trait MorphAnalyzer: Send + Sync {
    /// Return the single best-guess base form of `word`.
    ///
    /// Words the analyzer does not recognize are returned as-is; this is never an error.
    fn normal_form<'w>(&self, word: &'w str) -> Cow<'w, str>;

    /// Short backend name for logs
    fn name(&self) -> &str;
}

impl<T: MorphAnalyzer + ?Sized> MorphAnalyzer for &T {
    fn normal_form<'w>(&self, word: &'w str) -> Cow<'w, str> {
        (**self).normal_form(word)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<T: MorphAnalyzer + ?Sized> MorphAnalyzer for Box<T> {
    fn normal_form<'w>(&self, word: &'w str) -> Cow<'w, str> {
        (**self).normal_form(word)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

/// Available analyzer backends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum AnalyzerKind {
    /// Bundled Russian lemma table
    #[default]
    Builtin,
    /// Lemma dictionary file (requires a dictionary path)
    Dictionary,
}

/// Factory to create the requested analyzer
///
/// Loading a dictionary is the expensive part; do it once per process.
pub fn create_analyzer(
    kind: AnalyzerKind,
    dictionary: Option<&Path>,
) -> LemmatchResult<Box<dyn MorphAnalyzer>> {
    match kind {
        AnalyzerKind::Builtin => Ok(Box::new(LemmaDictionary::builtin()?)),
        AnalyzerKind::Dictionary => {
            let path = dictionary.ok_or_else(|| {
                LemmatchError::Analyzer("dictionary analyzer needs a dictionary path".to_string())
            })?;
            Ok(Box::new(LemmaDictionary::from_path(path)?))
        }
    }
}
