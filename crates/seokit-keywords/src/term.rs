//! Per-document term statistics.
//!
//! `TermStats` is built once from a token stream and shared by every
//! extractor: it records how often each term occurs and where.

use std::collections::HashMap;

use crate::KeywordResult;

/// Occurrence data for a single term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermEntry {
    /// The term text.
    pub term: String,
    /// Number of occurrences in the token stream.
    pub count: usize,
    /// Zero-based positions of every occurrence.
    pub positions: Vec<usize>,
}

/// Term counts and positions for one token stream, in first-occurrence order.
#[derive(Debug, Clone, Default)]
pub struct TermStats {
    /// Entries ordered by first occurrence.
    entries: Vec<TermEntry>,
    /// Term text to entry index.
    index: HashMap<String, usize>,
    /// Length of the token stream.
    total: usize,
}

impl TermStats {
    /// Counts terms in a token stream.
    pub fn from_tokens(tokens: &[String]) -> Self {
        let mut stats = Self {
            total: tokens.len(),
            ..Self::default()
        };

        for (position, token) in tokens.iter().enumerate() {
            if let Some(&idx) = stats.index.get(token) {
                let entry = &mut stats.entries[idx];
                entry.count += 1;
                entry.positions.push(position);
            } else {
                stats.index.insert(token.clone(), stats.entries.len());
                stats.entries.push(TermEntry {
                    term: token.clone(),
                    count: 1,
                    positions: vec![position],
                });
            }
        }

        stats
    }

    /// Returns the length of the token stream.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Returns the number of distinct terms.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the token stream was empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in first-occurrence order.
    pub fn iter(&self) -> impl Iterator<Item = &TermEntry> {
        self.entries.iter()
    }

    /// Looks up a term.
    pub fn get(&self, term: &str) -> Option<&TermEntry> {
        self.index.get(term).map(|&idx| &self.entries[idx])
    }

    /// Percentage of the token stream occupied by `count` occurrences.
    ///
    /// Returns 0 for an empty stream.
    pub fn density(&self, count: usize) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        count as f64 / self.total as f64 * 100.0
    }

    /// Builds the keyword record for an entry.
    pub fn keyword_result(&self, entry: &TermEntry) -> KeywordResult {
        KeywordResult {
            keyword: entry.term.clone(),
            density: self.density(entry.count),
            count: entry.count,
            positions: entry.positions.clone(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn tokens(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| (*w).to_string()).collect()
    }

    #[test]
    fn counts_and_positions() {
        let stats = TermStats::from_tokens(&tokens(&["写作", "技巧", "写作", "方法"]));

        assert_eq!(stats.total(), 4);
        assert_eq!(stats.len(), 3);

        let entry = stats.get("写作").unwrap();
        assert_eq!(entry.count, 2);
        assert_eq!(entry.positions, vec![0, 2]);
    }

    #[test]
    fn preserves_first_occurrence_order() {
        let stats = TermStats::from_tokens(&tokens(&["b", "a", "b", "c"]));
        let order: Vec<_> = stats.iter().map(|e| e.term.as_str()).collect();
        assert_eq!(order, vec!["b", "a", "c"]);
    }

    #[test]
    fn empty_stream() {
        let stats = TermStats::from_tokens(&[]);
        assert!(stats.is_empty());
        assert_eq!(stats.total(), 0);
        assert_eq!(stats.density(3), 0.0);
    }

    #[test]
    fn keyword_result_density() {
        let stats = TermStats::from_tokens(&tokens(&["写作", "技巧", "写作", "方法"]));
        let result = stats.keyword_result(stats.get("写作").unwrap());

        assert_eq!(result.keyword, "写作");
        assert_eq!(result.count, 2);
        assert!((result.density - 50.0).abs() < 1e-9);
        assert_eq!(result.positions, vec![0, 2]);
    }
}
