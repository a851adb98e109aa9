//! Raw n-gram frequency counting.
//!
//! The simplest extractor: count every CJK bigram and trigram, keep the ones
//! seen at least twice, and rank by count. It applies no stopwords and no
//! weighting, and is always available as the fallback tier for content
//! analysis.

use std::cmp::Reverse;

use super::{KeywordExtractor, KeywordResult};
use crate::{
    TermStats,
    tokenize::{Run, cjk_ngrams, runs},
};

/// Default minimum occurrences for a term to be reported.
const DEFAULT_MIN_COUNT: usize = 2;

/// Frequency-count keyword extractor over raw CJK n-grams.
#[derive(Debug, Clone, Copy)]
pub struct FrequencyCounter {
    /// Terms seen fewer times are dropped.
    min_count: usize,
}

impl Default for FrequencyCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl FrequencyCounter {
    /// Creates a counter that reports terms seen at least twice.
    pub fn new() -> Self {
        Self {
            min_count: DEFAULT_MIN_COUNT,
        }
    }

    /// Sets the minimum count.
    pub fn with_min_count(mut self, min_count: usize) -> Self {
        self.min_count = min_count;
        self
    }

    /// Counts raw n-grams and returns the `top_k` most frequent.
    ///
    /// Density is relative to the total number of n-grams; positions index
    /// into that n-gram stream.
    pub fn extract(&self, text: &str, top_k: usize) -> Vec<KeywordResult> {
        let ngrams: Vec<String> = runs(text)
            .into_iter()
            .filter_map(|run| match run {
                Run::Cjk(chars) => Some(cjk_ngrams(&chars).collect::<Vec<_>>()),
                Run::Latin(_) => None,
            })
            .flatten()
            .collect();

        let stats = TermStats::from_tokens(&ngrams);
        let mut results: Vec<KeywordResult> = stats
            .iter()
            .filter(|entry| entry.count >= self.min_count)
            .map(|entry| stats.keyword_result(entry))
            .collect();

        results.sort_by_key(|k| Reverse(k.count));
        results.truncate(top_k);
        results
    }
}

impl KeywordExtractor for FrequencyCounter {
    fn extract(&self, text: &str, top_k: usize) -> Vec<KeywordResult> {
        Self::extract(self, text, top_k)
    }
}
