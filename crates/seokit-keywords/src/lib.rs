//! Tokenization and keyword extraction for Chinese and Latin article text.
//!
//! Text is broken into candidate terms without a dictionary (CJK bigrams and
//! trigrams, lowercased Latin words), and keywords are ranked from those
//! terms. Everything here is a pure function of its input: no state survives a
//! call, and the same text always produces the same ranking.
//!
//! ## Keyword Extraction Methods
//!
//! - **Combined** (default): 60/40 blend of TF-IDF and TextRank densities
//! - **TF-IDF**: Single-document term frequency with length and frequency adjustments
//! - **TextRank**: Graph-based ranking similar to PageRank
//!
//! A raw n-gram [`FrequencyCounter`] is provided as a dependency-free fallback.

#![warn(missing_docs)]

pub mod keyword;
mod stopwords;
mod term;
mod tokenize;

pub use keyword::{
    CoOccurrenceGraph, CorpusIdf, FrequencyCounter, IdfProvider, KeywordAnalyzer,
    KeywordExtractor, KeywordMethod, KeywordResult, TextRankExtractor, TextRankParams,
    TfIdfExtractor, calculate_idf, extract_keywords,
};
pub use stopwords::Stopwords;
pub use term::{TermEntry, TermStats};
pub use tokenize::{MAX_TOKEN_CHARS, MIN_TOKEN_CHARS, Tokenizer, is_cjk, tokenize};
