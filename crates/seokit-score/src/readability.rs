//! Sentence-length readability heuristic.

use seokit_keywords::is_cjk;

/// Sentence terminators.
const SENTENCE_DELIMITERS: [char; 3] = ['。', '！', '？'];

/// Average CJK characters per sentence above which the first penalty applies.
const DENSE_SENTENCE: f64 = 20.0;
/// Average CJK characters per sentence above which the second penalty applies.
const VERY_DENSE_SENTENCE: f64 = 30.0;
/// Average sentence length in characters above which the length penalty applies.
const LONG_SENTENCE: f64 = 50.0;

/// Scores readability from 0 to 100 based on average sentence length.
///
/// The text is split on `。！？`; blank pieces are dropped. Text with no
/// sentence at all scores 0. Otherwise 100 loses 20 when sentences average
/// more than 20 CJK characters, another 20 above 30, and 10 more when they
/// average more than 50 characters of any kind. Text without delimiters is
/// one sentence.
pub fn calculate_readability(content: &str) -> u32 {
    let sentences = content
        .split(SENTENCE_DELIMITERS)
        .filter(|s| !s.trim().is_empty())
        .count();
    if sentences == 0 {
        return 0;
    }

    let cjk_per_sentence =
        content.chars().filter(|&c| is_cjk(c)).count() as f64 / sentences as f64;
    let chars_per_sentence = content.chars().count() as f64 / sentences as f64;

    let mut score: u32 = 100;
    if cjk_per_sentence > DENSE_SENTENCE {
        score = score.saturating_sub(20);
    }
    if cjk_per_sentence > VERY_DENSE_SENTENCE {
        score = score.saturating_sub(20);
    }
    if chars_per_sentence > LONG_SENTENCE {
        score = score.saturating_sub(10);
    }
    score
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn no_sentences_scores_zero() {
        assert_eq!(calculate_readability(""), 0);
        assert_eq!(calculate_readability("。。！？"), 0);
        assert_eq!(calculate_readability("  。\n！"), 0);
    }

    #[test]
    fn short_sentences_score_full() {
        assert_eq!(calculate_readability("写作。运营！排版？"), 100);
    }

    #[test]
    fn undelimited_text_is_one_sentence() {
        assert_eq!(calculate_readability(&"写".repeat(25)), 80);
        assert_eq!(calculate_readability(&"写".repeat(35)), 60);
        assert_eq!(calculate_readability(&"写".repeat(60)), 50);
    }

    #[test]
    fn thresholds_are_exclusive() {
        assert_eq!(calculate_readability(&"写".repeat(20)), 100);
        assert_eq!(calculate_readability(&"写".repeat(30)), 80);
        assert_eq!(calculate_readability(&"写".repeat(50)), 60);
    }

    #[test]
    fn latin_counts_toward_length_only() {
        assert_eq!(calculate_readability(&"a".repeat(60)), 90);
    }
}
