//! Text Normalization
//!
//! Reduces every word of a text to its base form so that inflected variants compare equal.

use crate::analyzer::MorphAnalyzer;

/// Rewrites text word-by-word through a morphological analyzer
pub struct Normalizer<A> {
    analyzer: A,
}

impl<A: MorphAnalyzer> Normalizer<A> {
    /// Create a normalizer around an already constructed analyzer
    pub fn new(analyzer: A) -> Self {
        Self { analyzer }
    }

    /// Access the underlying analyzer
    pub fn analyzer(&self) -> &A {
        &self.analyzer
    }

    /// Normalize text into space-joined base forms, preserving word order
    pub fn normalize(&self, text: &str) -> String {
        let mut result = String::with_capacity(text.len());

        for word in text.split_whitespace() {
            if !result.is_empty() {
                result.push(' ');
            }
            result.push_str(&self.analyzer.normal_form(word));
        }

        result
    }
}
