//! Single-document TF-IDF keyword extraction.
//!
//! No corpus is available in the common case, so the "IDF" half is a proxy:
//! two- and three-character terms (the typical length of a Chinese word) are
//! boosted, and terms that swamp the document are penalized.

use std::cmp::Ordering;

use tracing::debug;

use super::{IdfProvider, KeywordExtractor, KeywordResult};
use crate::{TermEntry, TermStats, tokenize};

/// Multiplier for terms of two or three characters.
const WORD_LENGTH_BOOST: f64 = 1.2;
/// Multiplier for terms above the frequency ceiling.
const OVER_FREQUENCY_PENALTY: f64 = 0.7;
/// Share of the token stream above which a term is penalized.
const FREQUENCY_CEILING: f64 = 0.1;

/// TF-IDF keyword extractor operating on one document at a time.
#[derive(Debug, Clone, Copy, Default)]
pub struct TfIdfExtractor;

impl TfIdfExtractor {
    /// Creates a new extractor.
    pub fn new() -> Self {
        Self
    }

    /// Extracts keywords ranked by the single-document score.
    ///
    /// Returns at most `top_k` keywords, highest score first. Ties keep the
    /// order in which terms first appear.
    pub fn extract(&self, text: &str, top_k: usize) -> Vec<KeywordResult> {
        let stats = TermStats::from_tokens(&tokenize(text));
        self.rank(&stats, top_k, |_| 1.0)
    }

    /// Extracts keywords, additionally weighting each score by corpus IDF.
    ///
    /// Terms unknown to the provider keep their single-document score. This
    /// is an explicit opt-in; [`extract`](Self::extract) never consults a
    /// corpus.
    pub fn extract_with_idf<P: IdfProvider>(
        &self,
        text: &str,
        top_k: usize,
        idf_provider: &P,
    ) -> Vec<KeywordResult> {
        let stats = TermStats::from_tokens(&tokenize(text));
        self.rank(&stats, top_k, |term| idf_provider.idf(term).unwrap_or(1.0))
    }

    /// Scores every term, sorts, and converts the top entries.
    fn rank<F>(&self, stats: &TermStats, top_k: usize, idf: F) -> Vec<KeywordResult>
    where
        F: Fn(&str) -> f64,
    {
        if stats.is_empty() {
            return Vec::new();
        }

        let mut scored: Vec<(&TermEntry, f64)> = stats
            .iter()
            .map(|entry| (entry, term_score(entry, stats.total()) * idf(&entry.term)))
            .collect();

        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

        debug!(
            tokens = stats.total(),
            terms = stats.len(),
            "ranked terms by tf-idf"
        );

        scored
            .into_iter()
            .take(top_k)
            .map(|(entry, _)| stats.keyword_result(entry))
            .collect()
    }
}

impl KeywordExtractor for TfIdfExtractor {
    fn extract(&self, text: &str, top_k: usize) -> Vec<KeywordResult> {
        Self::extract(self, text, top_k)
    }
}

/// Computes the single-document score for a term.
///
/// Formula: `count / total`, times 1.2 for two- or three-character terms,
/// times 0.7 when the term makes up more than 10% of the stream.
fn term_score(entry: &TermEntry, total: usize) -> f64 {
    let mut score = entry.count as f64 / total as f64;

    let len = entry.term.chars().count();
    if len == 2 || len == 3 {
        score *= WORD_LENGTH_BOOST;
    }

    if entry.count as f64 > total as f64 * FREQUENCY_CEILING {
        score *= OVER_FREQUENCY_PENALTY;
    }

    score
}
