//! Cross-document inverse document frequency.
//!
//! The single-document extractors never consult these values. They are a
//! building block for callers that do have a corpus and opt in through
//! [`TfIdfExtractor::extract_with_idf`](super::TfIdfExtractor::extract_with_idf).

use std::collections::{HashMap, HashSet};

use crate::tokenize;

/// Trait for providing IDF values for terms.
///
/// This abstraction lets TF-IDF ranking work with different IDF sources,
/// such as a precomputed corpus table or cached values.
pub trait IdfProvider {
    /// Returns the IDF value for a term, or `None` if the term is unknown.
    fn idf(&self, term: &str) -> Option<f64>;
}

/// Computes `ln(N / (df + 1))` for every term of a tokenized corpus.
///
/// `N` is the number of documents and `df` the number of documents containing
/// the term. Terms present in every document get a negative value, matching
/// the smoothing used by the formula.
pub fn calculate_idf(documents: &[Vec<String>]) -> HashMap<String, f64> {
    let total_docs = documents.len() as f64;
    let mut doc_freq: HashMap<&str, usize> = HashMap::new();

    for doc in documents {
        let unique: HashSet<&str> = doc.iter().map(String::as_str).collect();
        for term in unique {
            *doc_freq.entry(term).or_insert(0) += 1;
        }
    }

    doc_freq
        .into_iter()
        .map(|(term, df)| (term.to_string(), (total_docs / (df as f64 + 1.0)).ln()))
        .collect()
}

/// IDF table computed from a tokenized corpus.
#[derive(Debug, Clone, Default)]
pub struct CorpusIdf {
    /// Term to IDF value.
    values: HashMap<String, f64>,
}

impl CorpusIdf {
    /// Builds the table from tokenized documents.
    pub fn from_documents(documents: &[Vec<String>]) -> Self {
        Self {
            values: calculate_idf(documents),
        }
    }

    /// Tokenizes raw texts and builds the table.
    pub fn from_texts<S: AsRef<str>>(texts: &[S]) -> Self {
        let documents: Vec<Vec<String>> = texts.iter().map(|t| tokenize(t.as_ref())).collect();
        Self::from_documents(&documents)
    }

    /// Returns the number of terms in the table.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the corpus contained no terms.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl IdfProvider for CorpusIdf {
    fn idf(&self, term: &str) -> Option<f64> {
        self.values.get(term).copied()
    }
}
