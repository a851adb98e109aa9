//! Stopword filtering for keyword candidates.
//!
//! The list covers high-frequency Chinese function words. Single-character
//! entries never match a token (tokens are at least two characters long) but
//! are kept so the set reads as the complete word list.

use std::collections::HashSet;

/// A stopword filter over common Chinese function words.
///
/// Uses a `HashSet` for O(1) lookup. Matching is exact; Latin tokens are
/// already lowercased by the tokenizer before they reach the filter.
#[derive(Debug, Clone)]
pub struct Stopwords {
    /// The stopword set.
    words: HashSet<&'static str>,
}

impl Default for Stopwords {
    fn default() -> Self {
        Self::new()
    }
}

impl Stopwords {
    /// Creates a filter holding the built-in Chinese stopwords.
    pub fn new() -> Self {
        Self {
            words: CHINESE_STOPWORDS.iter().copied().collect(),
        }
    }

    /// Checks if a term is a stopword.
    pub fn contains(&self, term: &str) -> bool {
        self.words.contains(term)
    }

    /// Returns the total number of stopwords.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if no stopwords are configured.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Chinese function words excluded from keyword candidacy.
static CHINESE_STOPWORDS: &[&str] = &[
    "的", "了", "在", "是", "我", "有", "和", "就", "不", "人", "都", "一", "一个", "上", "也", "很",
    "到", "说", "要", "去", "你", "会", "着", "没有", "看", "好", "自己", "这",
];

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn contains_multi_char_stopwords() {
        let sw = Stopwords::new();
        assert!(sw.contains("一个"));
        assert!(sw.contains("没有"));
        assert!(sw.contains("自己"));
    }

    #[test]
    fn contains_single_char_stopwords() {
        let sw = Stopwords::new();
        assert!(sw.contains("的"));
        assert!(sw.contains("这"));
    }

    #[test]
    fn content_words_not_matched() {
        let sw = Stopwords::new();
        assert!(!sw.contains("技巧"));
        assert!(!sw.contains("公众号"));
        assert!(!sw.contains("rust"));
    }

    #[test]
    fn has_full_list() {
        let sw = Stopwords::new();
        assert_eq!(sw.len(), 28);
        assert!(!sw.is_empty());
    }
}
