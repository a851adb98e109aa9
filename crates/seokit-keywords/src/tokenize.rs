//! Dictionary-free tokenization of Chinese and Latin text.
//!
//! Chinese has no word delimiters, so instead of segmenting we emit every
//! two- and three-character window of each ideograph run. Latin words are
//! taken whole and lowercased.

use std::iter;

use crate::Stopwords;

/// Punctuation replaced with whitespace before scanning.
static PUNCTUATION: &[char] = &[
    '，', '。', '！', '？', '；', '：', '"', '\'', '（', '）', '【', '】', '《', '》', '、',
];

/// Shortest token kept.
pub const MIN_TOKEN_CHARS: usize = 2;
/// Longest token kept.
pub const MAX_TOKEN_CHARS: usize = 6;

/// Returns true for characters in the CJK Unified Ideographs block handled here.
pub fn is_cjk(c: char) -> bool {
    ('\u{4e00}'..='\u{9fa5}').contains(&c)
}

/// A maximal run of one character class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Run {
    /// One or more CJK ideographs.
    Cjk(Vec<char>),
    /// One or more ASCII letters.
    Latin(String),
}

/// Splits text into maximal CJK and ASCII-letter runs, discarding everything else.
pub(crate) fn runs(text: &str) -> Vec<Run> {
    let mut runs = Vec::new();
    let mut current: Option<Run> = None;

    for c in text.chars() {
        let c = if PUNCTUATION.contains(&c) { ' ' } else { c };
        match current.as_mut() {
            Some(Run::Cjk(chars)) if is_cjk(c) => {
                chars.push(c);
                continue;
            }
            Some(Run::Latin(word)) if c.is_ascii_alphabetic() => {
                word.push(c);
                continue;
            }
            _ => {}
        }

        runs.extend(current.take());
        current = if is_cjk(c) {
            Some(Run::Cjk(vec![c]))
        } else if c.is_ascii_alphabetic() {
            Some(Run::Latin(c.to_string()))
        } else {
            None
        };
    }
    runs.extend(current);

    runs
}

/// Emits the bigram and trigram windows of an ideograph run in stream order.
///
/// For each start offset the bigram comes first, then the trigram if one fits.
pub(crate) fn cjk_ngrams(chars: &[char]) -> impl Iterator<Item = String> + '_ {
    (0..chars.len().saturating_sub(1)).flat_map(move |i| {
        let bigram = chars[i..i + 2].iter().collect::<String>();
        let trigram = (i + 3 <= chars.len()).then(|| chars[i..i + 3].iter().collect::<String>());
        iter::once(bigram).chain(trigram)
    })
}

/// Turns raw text into an ordered sequence of candidate terms.
///
/// Tokens are CJK bigrams and trigrams or lowercased Latin words, limited to
/// 2–6 characters and filtered against the stopword set. Empty or
/// punctuation-only input yields an empty vector.
pub fn tokenize(text: &str) -> Vec<String> {
    Tokenizer::new().tokenize(text)
}

/// Reusable tokenizer holding its stopword set.
#[derive(Debug, Clone, Default)]
pub struct Tokenizer {
    /// Terms dropped from the output.
    stopwords: Stopwords,
}

impl Tokenizer {
    /// Creates a tokenizer with the built-in stopwords.
    pub fn new() -> Self {
        Self {
            stopwords: Stopwords::new(),
        }
    }

    /// Tokenizes text. See [`tokenize`].
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let mut tokens = Vec::new();

        for run in runs(text) {
            match run {
                Run::Cjk(chars) => tokens.extend(cjk_ngrams(&chars)),
                Run::Latin(word) => tokens.push(word.to_ascii_lowercase()),
            }
        }

        tokens.retain(|token| self.is_candidate(token));
        tokens
    }

    /// Checks the length bounds and stopword membership of a token.
    fn is_candidate(&self, token: &str) -> bool {
        let len = token.chars().count();
        (MIN_TOKEN_CHARS..=MAX_TOKEN_CHARS).contains(&len) && !self.stopwords.contains(token)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn empty_input_yields_nothing() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("，。！？、《》").is_empty());
        assert!(tokenize("   123 !!").is_empty());
    }

    #[test]
    fn cjk_run_emits_interleaved_ngrams() {
        assert_eq!(
            tokenize("公众号运营"),
            vec!["公众", "公众号", "众号", "众号运", "号运", "号运营", "运营"]
        );
    }

    #[test]
    fn single_ideograph_emits_nothing() {
        assert!(tokenize("猫").is_empty());
    }

    #[test]
    fn latin_words_are_lowercased() {
        assert_eq!(tokenize("Rust SEO"), vec!["rust", "seo"]);
    }

    #[test]
    fn latin_words_outside_length_bounds_dropped() {
        assert_eq!(tokenize("a wechat optimization go"), vec!["wechat", "go"]);
    }

    #[test]
    fn punctuation_splits_runs() {
        assert_eq!(tokenize("写作，技巧"), vec!["写作", "技巧"]);
    }

    #[test]
    fn mixed_scripts_split_into_separate_runs() {
        assert_eq!(tokenize("学习Rust编程"), vec!["学习", "rust", "编程"]);
    }

    #[test]
    fn stopwords_filtered() {
        // "一个" and "自己" are stopwords; their surrounding trigrams are not.
        let tokens = tokenize("一个自己");
        assert!(!tokens.contains(&"一个".to_string()));
        assert!(!tokens.contains(&"自己".to_string()));
        assert!(tokens.contains(&"一个自".to_string()));
    }

    #[test]
    fn tokens_respect_bounds_and_stopwords() {
        let stopwords = Stopwords::new();
        let text = "如何在5分钟内提升写作技巧？这是一个Extraordinarily好的问题，我们没有time了。";
        for token in tokenize(text) {
            let len = token.chars().count();
            assert!((2..=6).contains(&len), "bad length: {token}");
            assert!(!stopwords.contains(&token), "stopword leaked: {token}");
        }
    }

    #[test]
    fn runs_classify_characters() {
        assert_eq!(
            runs("ab中文 x"),
            vec![
                Run::Latin("ab".to_string()),
                Run::Cjk(vec!['中', '文']),
                Run::Latin("x".to_string()),
            ]
        );
    }
}
