//! Lemma dictionary backend
//!
//! File format, one entry per line:
//!
//! ```text
//! # comment
//! мыла    мыть
//! рамы    рама
//! мама
//! ```
//!
//! Two columns map a form to its lemma; a single column declares a word that is its
//! own lemma. Columns are separated by any whitespace.
//!
//! A Russian table in the same format is compiled into the binary and backs the default
//! analyzer.

use super::MorphAnalyzer;
use crate::error::{LemmatchError, LemmatchResult};
use std::borrow::Cow;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info, warn};

/// Bundled Russian form -> lemma table
const BUILTIN_LEMMAS: &str = include_str!("../../data/ru_lemmas.tsv");

/// Form -> lemma lookup table
///
/// Every stored lemma maps to itself, so looking up a lemma never yields another word.
#[derive(Debug, Clone, Default)]
pub struct LemmaDictionary {
    lemmas: HashMap<String, String>,
}

impl LemmaDictionary {
    /// The Russian table shipped with the crate
    pub fn builtin() -> LemmatchResult<Self> {
        let dictionary = Self::from_reader(BUILTIN_LEMMAS.as_bytes())?;
        debug!("Built-in lemma table: {} forms", dictionary.len());
        Ok(dictionary)
    }

    /// Load a dictionary from disk
    pub fn from_path(path: &Path) -> LemmatchResult<Self> {
        if !path.exists() {
            return Err(LemmatchError::DictionaryMissing(path.to_path_buf()));
        }

        info!("Loading lemma dictionary from: {}", path.display());
        let file = File::open(path)?;
        let dictionary = Self::from_reader(BufReader::new(file))?;
        info!("📚 Loaded {} dictionary forms", dictionary.len());

        Ok(dictionary)
    }

    /// Parse a dictionary from any buffered reader
    pub fn from_reader<R: BufRead>(reader: R) -> LemmatchResult<Self> {
        let mut dictionary = Self::default();

        for (idx, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| LemmatchError::from_read(e, "lemma dictionary"))?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let columns: Vec<&str> = line.split_whitespace().collect();
            match columns.as_slice() {
                [word] => dictionary.insert(word, word),
                [form, lemma] => dictionary.insert(form, lemma),
                _ => {
                    return Err(LemmatchError::DictionaryFormat {
                        line: idx + 1,
                        reason: format!("expected 1 or 2 columns, found {}", columns.len()),
                    })
                }
            }
        }

        Ok(dictionary)
    }

    /// Build a dictionary from in-memory (form, lemma) pairs
    pub fn from_entries<I, F, L>(entries: I) -> Self
    where
        I: IntoIterator<Item = (F, L)>,
        F: AsRef<str>,
        L: AsRef<str>,
    {
        let mut dictionary = Self::default();
        for (form, lemma) in entries {
            dictionary.insert(form.as_ref(), lemma.as_ref());
        }
        dictionary
    }

    /// Number of known forms (lemmas included)
    pub fn len(&self) -> usize {
        self.lemmas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lemmas.is_empty()
    }

    /// Look up the lemma of a form, ignoring case
    pub fn lemma(&self, word: &str) -> Option<&str> {
        self.lemmas.get(&word.to_lowercase()).map(String::as_str)
    }

    // First entry for a form wins. A lemma that is itself a known form is resolved to
    // that form's lemma, keeping every stored value a fixed point.
    fn insert(&mut self, form: &str, lemma: &str) {
        let form = form.to_lowercase();
        let lemma = lemma.to_lowercase();
        let target = match self.lemmas.get(&lemma) {
            Some(resolved) if *resolved != lemma => {
                debug!("Resolving '{}' -> '{}' via '{}'", form, resolved, lemma);
                resolved.clone()
            }
            _ => lemma,
        };

        if let Some(existing) = self.lemmas.get(&form) {
            if *existing != target {
                warn!(
                    "Ignoring duplicate form '{}' -> '{}' (already '{}')",
                    form, target, existing
                );
            }
        } else {
            self.lemmas.insert(form, target.clone());
        }

        self.lemmas.entry(target.clone()).or_insert(target);
    }
}

impl MorphAnalyzer for LemmaDictionary {
    fn normal_form<'w>(&self, word: &'w str) -> Cow<'w, str> {
        match self.lemma(word) {
            Some(lemma) => Cow::Owned(lemma.to_string()),
            None => Cow::Borrowed(word),
        }
    }

    fn name(&self) -> &str {
        "dictionary"
    }
}
