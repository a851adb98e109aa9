//! Keyword extraction algorithms.
//!
//! This module provides the extractors and the analyzer that combines them:
//!
//! - **TF-IDF**: Normalized term frequency with a length boost and an
//!   over-frequency penalty standing in for IDF. Works on one document.
//! - **TextRank**: Graph-based ranking similar to PageRank over a
//!   co-occurrence window.
//! - **Combined**: Blends both rankings with fixed weights (the default).
//! - **Frequency**: Raw n-gram counting, kept as the always-available fallback
//!   tier for content scoring.

mod frequency;
mod idf;
mod textrank;
mod tfidf;

use std::{cmp::Ordering, collections::HashMap, fmt, str};

pub use frequency::FrequencyCounter;
pub use idf::{CorpusIdf, IdfProvider, calculate_idf};
use serde::Serialize;
pub use textrank::{CoOccurrenceGraph, TextRankExtractor, TextRankParams};
pub use tfidf::TfIdfExtractor;
use tracing::debug;

/// Share of the blended density contributed by TF-IDF.
const TFIDF_WEIGHT: f64 = 0.6;
/// Share of the blended density contributed by TextRank.
const TEXTRANK_WEIGHT: f64 = 0.4;

/// A ranked keyword with its occurrence statistics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeywordResult {
    /// The keyword text.
    pub keyword: String,
    /// Percentage of the token stream occupied by this term. For combined
    /// results this is the weighted blend of both extractors.
    pub density: f64,
    /// Occurrence count.
    pub count: usize,
    /// Zero-based token-stream positions of every occurrence.
    pub positions: Vec<usize>,
}

/// Common interface of every keyword extractor.
pub trait KeywordExtractor {
    /// Extracts at most `top_k` keywords from `text`, most relevant first.
    fn extract(&self, text: &str, top_k: usize) -> Vec<KeywordResult>;
}

/// Available keyword extraction methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum KeywordMethod {
    /// Single-document TF-IDF.
    TfIdf,
    /// TextRank graph-based ranking.
    TextRank,
    /// Weighted blend of TF-IDF and TextRank.
    #[default]
    Combined,
}

impl KeywordMethod {
    /// Returns a brief description of the method.
    pub fn description(&self) -> &'static str {
        match self {
            Self::TfIdf => "Term frequency with length boost and frequency penalty",
            Self::TextRank => "Graph-based ranking similar to PageRank",
            Self::Combined => "60/40 blend of TF-IDF and TextRank",
        }
    }
}

impl fmt::Display for KeywordMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TfIdf => write!(f, "tfidf"),
            Self::TextRank => write!(f, "textrank"),
            Self::Combined => write!(f, "combined"),
        }
    }
}

impl str::FromStr for KeywordMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "tfidf" | "tf-idf" | "tf_idf" => Ok(Self::TfIdf),
            "textrank" | "text-rank" | "text_rank" => Ok(Self::TextRank),
            "combined" => Ok(Self::Combined),
            _ => Err(format!(
                "unknown method '{}', expected one of: tfidf, textrank, combined",
                s
            )),
        }
    }
}

/// Keyword analyzer combining TF-IDF and TextRank.
///
/// Holds only algorithm parameters, so it is cheap to construct per call.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordAnalyzer {
    /// TF-IDF extractor.
    tfidf: TfIdfExtractor,
    /// TextRank extractor.
    textrank: TextRankExtractor,
    /// Method used by the [`KeywordExtractor`] implementation.
    method: KeywordMethod,
}

impl KeywordAnalyzer {
    /// Creates an analyzer with default TextRank parameters and the combined method.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an analyzer with custom TextRank parameters.
    pub fn with_params(params: TextRankParams) -> Self {
        Self {
            textrank: TextRankExtractor::with_params(params),
            ..Self::default()
        }
    }

    /// Sets the method used when the analyzer acts as a [`KeywordExtractor`].
    pub fn with_method(mut self, method: KeywordMethod) -> Self {
        self.method = method;
        self
    }

    /// Returns the configured method.
    pub fn method(&self) -> KeywordMethod {
        self.method
    }

    /// Extracts keywords with the given method.
    pub fn analyze(&self, text: &str, method: KeywordMethod, top_k: usize) -> Vec<KeywordResult> {
        match method {
            KeywordMethod::TfIdf => self.tfidf.extract(text, top_k),
            KeywordMethod::TextRank => self.textrank.extract(text, top_k),
            KeywordMethod::Combined => self.combine(text, top_k),
        }
    }

    /// Merges TF-IDF and TextRank results by keyword.
    ///
    /// Each side contributes twice `top_k` candidates. TF-IDF entries enter at
    /// 60% of their density; TextRank adds 40% of its density to an existing
    /// entry or inserts a new one at 40%. Count and positions come from
    /// whichever extractor contributed the keyword first.
    fn combine(&self, text: &str, top_k: usize) -> Vec<KeywordResult> {
        let pool = top_k.saturating_mul(2);
        let tfidf_results = self.tfidf.extract(text, pool);
        let textrank_results = self.textrank.extract(text, pool);

        let mut merged: Vec<KeywordResult> = Vec::with_capacity(tfidf_results.len());
        let mut index: HashMap<String, usize> = HashMap::new();

        for mut item in tfidf_results {
            item.density *= TFIDF_WEIGHT;
            index.insert(item.keyword.clone(), merged.len());
            merged.push(item);
        }

        for mut item in textrank_results {
            if let Some(&idx) = index.get(&item.keyword) {
                merged[idx].density += item.density * TEXTRANK_WEIGHT;
            } else {
                item.density *= TEXTRANK_WEIGHT;
                index.insert(item.keyword.clone(), merged.len());
                merged.push(item);
            }
        }

        debug!(candidates = merged.len(), top_k, "combined keyword rankings");

        merged.sort_by(|a, b| b.density.partial_cmp(&a.density).unwrap_or(Ordering::Equal));
        merged.truncate(top_k);
        merged
    }
}

impl KeywordExtractor for KeywordAnalyzer {
    fn extract(&self, text: &str, top_k: usize) -> Vec<KeywordResult> {
        self.analyze(text, self.method, top_k)
    }
}

/// Extracts keywords with default parameters.
///
/// Convenience wrapper around [`KeywordAnalyzer::analyze`].
pub fn extract_keywords(text: &str, top_k: usize, method: KeywordMethod) -> Vec<KeywordResult> {
    KeywordAnalyzer::new().analyze(text, method, top_k)
}

#[cfg(test)]
mod test {
    use std::collections::HashSet;

    use super::*;

    const SAMPLE_TEXT: &str = "公众号运营需要写作技巧。写作技巧决定文章质量，\
        好的写作技巧让公众号文章更有吸引力。运营公众号的核心是持续输出优质内容。";

    #[test]
    fn method_from_str() {
        assert_eq!("tfidf".parse::<KeywordMethod>().unwrap(), KeywordMethod::TfIdf);
        assert_eq!("TF-IDF".parse::<KeywordMethod>().unwrap(), KeywordMethod::TfIdf);
        assert_eq!(
            "text_rank".parse::<KeywordMethod>().unwrap(),
            KeywordMethod::TextRank
        );
        assert_eq!(
            "combined".parse::<KeywordMethod>().unwrap(),
            KeywordMethod::Combined
        );
        assert!("rake".parse::<KeywordMethod>().is_err());
    }

    #[test]
    fn method_display_round_trips() {
        for method in [
            KeywordMethod::TfIdf,
            KeywordMethod::TextRank,
            KeywordMethod::Combined,
        ] {
            assert_eq!(method.to_string().parse::<KeywordMethod>().unwrap(), method);
        }
    }

    #[test]
    fn default_method_is_combined() {
        assert_eq!(KeywordMethod::default(), KeywordMethod::Combined);
        assert_eq!(KeywordAnalyzer::new().method(), KeywordMethod::Combined);
    }

    #[test]
    fn combined_has_unique_keywords() {
        let results = extract_keywords(SAMPLE_TEXT, 10, KeywordMethod::Combined);
        assert!(!results.is_empty());
        assert!(results.len() <= 10);

        let unique: HashSet<_> = results.iter().map(|k| k.keyword.as_str()).collect();
        assert_eq!(unique.len(), results.len());
    }

    #[test]
    fn combined_is_sorted_by_blended_density() {
        let results = extract_keywords(SAMPLE_TEXT, 10, KeywordMethod::Combined);
        for pair in results.windows(2) {
            assert!(pair[0].density >= pair[1].density);
        }
    }

    #[test]
    fn combined_blends_densities() {
        // Every keyword ranks in both extractors here, so each blended density
        // is 0.6 * d + 0.4 * d = d.
        let text = "写作技巧";
        let tfidf = extract_keywords(text, 10, KeywordMethod::TfIdf);
        let combined = extract_keywords(text, 10, KeywordMethod::Combined);

        assert_eq!(tfidf.len(), combined.len());
        for kw in &combined {
            let plain = tfidf.iter().find(|k| k.keyword == kw.keyword).unwrap();
            assert!((kw.density - plain.density).abs() < 1e-9);
            assert_eq!(kw.count, plain.count);
            assert_eq!(kw.positions, plain.positions);
        }
    }

    #[test]
    fn delegates_single_methods() {
        let analyzer = KeywordAnalyzer::new();
        assert_eq!(
            analyzer.analyze(SAMPLE_TEXT, KeywordMethod::TfIdf, 5),
            TfIdfExtractor::new().extract(SAMPLE_TEXT, 5)
        );
        assert_eq!(
            analyzer.analyze(SAMPLE_TEXT, KeywordMethod::TextRank, 5),
            TextRankExtractor::new().extract(SAMPLE_TEXT, 5)
        );
    }

    #[test]
    fn extractor_trait_uses_configured_method() {
        let analyzer = KeywordAnalyzer::new().with_method(KeywordMethod::TfIdf);
        assert_eq!(
            KeywordExtractor::extract(&analyzer, SAMPLE_TEXT, 5),
            extract_keywords(SAMPLE_TEXT, 5, KeywordMethod::TfIdf)
        );
    }

    #[test]
    fn empty_text_yields_nothing() {
        for method in [
            KeywordMethod::TfIdf,
            KeywordMethod::TextRank,
            KeywordMethod::Combined,
        ] {
            assert!(extract_keywords("", 10, method).is_empty());
            assert!(extract_keywords("。！？", 10, method).is_empty());
        }
    }

    #[test]
    fn zero_top_k_yields_nothing() {
        assert!(extract_keywords(SAMPLE_TEXT, 0, KeywordMethod::Combined).is_empty());
    }

    #[test]
    fn repeated_calls_are_identical() {
        let first = extract_keywords(SAMPLE_TEXT, 15, KeywordMethod::Combined);
        let second = extract_keywords(SAMPLE_TEXT, 15, KeywordMethod::Combined);
        assert_eq!(first, second);
    }
}
