//! Best-match search
//!
//! Pairs every source text with the candidate whose normalized form is most similar.
//! Candidates are normalized once, when the matcher is built; sources are normalized
//! lazily as results are pulled from the iterator.

use super::normalizer::Normalizer;
use super::result::MatchResult;
use crate::analyzer::MorphAnalyzer;
use crate::utils::fuzzy::ratio;
use tracing::{debug, trace};

/// A candidate with its memoized normal form
#[derive(Debug)]
struct NormalizedCandidate<'c> {
    text: &'c str,
    normalized: String,
}

/// Scores source texts against a fixed candidate list
pub struct Matcher<'c, A> {
    normalizer: Normalizer<A>,
    candidates: Vec<NormalizedCandidate<'c>>,
}

impl<'c, A: MorphAnalyzer> Matcher<'c, A> {
    /// Build a matcher, normalizing every candidate up front
    pub fn new<C: AsRef<str>>(analyzer: A, candidates: &'c [C]) -> Self {
        let normalizer = Normalizer::new(analyzer);
        let candidates: Vec<_> = candidates
            .iter()
            .map(|c| {
                let text = c.as_ref();
                NormalizedCandidate {
                    text,
                    normalized: normalizer.normalize(text),
                }
            })
            .collect();

        debug!(
            "Matcher ready: {} candidates normalized with {}",
            candidates.len(),
            normalizer.analyzer().name()
        );

        Self {
            normalizer,
            candidates,
        }
    }

    /// Number of candidates
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Find the best candidate for one source text
    ///
    /// A candidate replaces the running best only with a strictly higher score, so the
    /// earliest candidate wins ties and a candidate scoring 0 is never selected.
    pub fn best_match(&self, source: &str) -> MatchResult {
        let normalized = self.normalizer.normalize(source);
        let mut best: Option<(usize, &NormalizedCandidate<'c>)> = None;
        let mut best_score = 0u8;

        for (index, candidate) in self.candidates.iter().enumerate() {
            let score = ratio(&normalized, &candidate.normalized);
            trace!(
                "'{}' vs '{}' [{}]: {}",
                normalized,
                candidate.normalized,
                index,
                score
            );

            if score > best_score {
                best_score = score;
                best = Some((index, candidate));
            }
        }

        let result = match best {
            Some((index, candidate)) => MatchResult {
                source: source.to_string(),
                candidate: candidate.text.to_string(),
                index: Some(index),
                score: best_score,
            },
            None => MatchResult::no_match(source),
        };

        debug!(
            "Best match for '{}': {:?} ({}%)",
            source, result.index, result.score
        );
        result
    }

    /// Consume the matcher into a lazy iterator over `sources`
    pub fn into_matches<I>(self, sources: I) -> Matches<'c, A, I::IntoIter>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        Matches {
            matcher: self,
            sources: sources.into_iter(),
        }
    }
}

/// Lazy sequence of match results, one per source, in source order
pub struct Matches<'c, A, I> {
    matcher: Matcher<'c, A>,
    sources: I,
}

impl<'c, A, I> Iterator for Matches<'c, A, I>
where
    A: MorphAnalyzer,
    I: Iterator,
    I::Item: AsRef<str>,
{
    type Item = MatchResult;

    fn next(&mut self) -> Option<Self::Item> {
        let source = self.sources.next()?;
        Some(self.matcher.best_match(source.as_ref()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.sources.size_hint()
    }
}

impl<'c, A, I> ExactSizeIterator for Matches<'c, A, I>
where
    A: MorphAnalyzer,
    I: ExactSizeIterator,
    I::Item: AsRef<str>,
{
}

/// Match every source against `candidates` using `analyzer`
///
/// The analyzer is caller-owned: pass a reference to reuse one instance across calls.
pub fn match_all<'c, A, S, C>(
    analyzer: A,
    sources: S,
    candidates: &'c [C],
) -> Matches<'c, A, S::IntoIter>
where
    A: MorphAnalyzer,
    S: IntoIterator,
    S::Item: AsRef<str>,
    C: AsRef<str>,
{
    Matcher::new(analyzer, candidates).into_matches(sources)
}
