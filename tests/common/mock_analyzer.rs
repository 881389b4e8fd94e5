//! Mock Analyzer for Testing
//!
//! Table-driven lemmatizer that records every lookup.

use lemmatch::MorphAnalyzer;
use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Mock analyzer returning predetermined base forms
pub struct MockAnalyzer {
    /// Word -> base form; unknown words pass through
    table: HashMap<String, String>,
    /// Number of normal_form calls
    calls: AtomicUsize,
    /// Every word looked up, in call order
    pub seen: Mutex<Vec<String>>,
}

impl MockAnalyzer {
    pub fn new(entries: &[(&str, &str)]) -> Self {
        Self {
            table: entries
                .iter()
                .map(|(w, l)| (w.to_string(), l.to_string()))
                .collect(),
            calls: AtomicUsize::new(0),
            seen: Mutex::new(Vec::new()),
        }
    }

    /// Analyzer that knows no words at all
    pub fn identity() -> Self {
        Self::new(&[])
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl MorphAnalyzer for MockAnalyzer {
    fn normal_form<'w>(&self, word: &'w str) -> Cow<'w, str> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut seen) = self.seen.lock() {
            seen.push(word.to_string());
        }

        match self.table.get(word) {
            Some(lemma) => Cow::Owned(lemma.clone()),
            None => Cow::Borrowed(word),
        }
    }

    fn name(&self) -> &str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_counts_calls() {
        let mock = MockAnalyzer::new(&[("рамы", "рама")]);
        assert_eq!(mock.normal_form("рамы"), "рама");
        assert_eq!(mock.normal_form("окно"), "окно");
        assert_eq!(mock.calls(), 2);
        assert_eq!(*mock.seen.lock().unwrap(), vec!["рамы", "окно"]);
    }
}
