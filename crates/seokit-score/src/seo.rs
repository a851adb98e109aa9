//! Overall SEO score.

use serde::Serialize;

use crate::{ContentAnalysis, TitleAnalysis};

/// Keyword score used when the article declares no target keywords.
pub const DEFAULT_KEYWORD_SCORE: u32 = 75;

/// Weight of the title score.
const TITLE_WEIGHT: f64 = 0.3;
/// Weight of the content score.
const CONTENT_WEIGHT: f64 = 0.4;
/// Weight of the keyword score.
const KEYWORD_WEIGHT: f64 = 0.2;
/// Weight of the readability score.
const READABILITY_WEIGHT: f64 = 0.1;

/// Weighted blend of the individual scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeoScore {
    /// Rounded weighted sum.
    pub overall: u32,
    /// Title score.
    pub title: u32,
    /// Keyword score.
    pub keywords: u32,
    /// Content score.
    pub content: u32,
    /// Readability score.
    pub readability: u32,
}

impl SeoScore {
    /// Blends the four scores as `0.3 title + 0.4 content + 0.2 keywords + 0.1 readability`,
    /// rounded to the nearest integer.
    pub fn compute(title: u32, content: u32, keywords: u32, readability: u32) -> Self {
        let weighted = f64::from(title) * TITLE_WEIGHT
            + f64::from(content) * CONTENT_WEIGHT
            + f64::from(keywords) * KEYWORD_WEIGHT
            + f64::from(readability) * READABILITY_WEIGHT;

        Self {
            overall: weighted.round() as u32,
            title,
            keywords,
            content,
            readability,
        }
    }

    /// Blends a title analysis and a content analysis of the same article.
    ///
    /// The keyword score is the title's target coverage when the article has
    /// targets, [`DEFAULT_KEYWORD_SCORE`] otherwise. Readability comes from
    /// the content analysis.
    pub fn from_analyses(title: &TitleAnalysis, content: &ContentAnalysis, has_targets: bool) -> Self {
        let keywords = if has_targets {
            title.keyword_density.round().clamp(0.0, 100.0) as u32
        } else {
            DEFAULT_KEYWORD_SCORE
        };
        Self::compute(title.score, content.score, keywords, content.readability_score)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{analyze_content, analyze_title};

    #[test]
    fn weights() {
        assert_eq!(SeoScore::compute(100, 100, 100, 100).overall, 100);
        assert_eq!(SeoScore::compute(0, 0, 0, 0).overall, 0);
        assert_eq!(SeoScore::compute(80, 90, 70, 60).overall, 80);
        assert_eq!(SeoScore::compute(100, 0, 0, 0).overall, 30);
        assert_eq!(SeoScore::compute(0, 100, 0, 0).overall, 40);
        assert_eq!(SeoScore::compute(0, 0, 100, 0).overall, 20);
        assert_eq!(SeoScore::compute(0, 0, 0, 100).overall, 10);
    }

    #[test]
    fn keeps_components() {
        let score = SeoScore::compute(81, 92, 73, 64);
        assert_eq!(
            (score.title, score.content, score.keywords, score.readability),
            (81, 92, 73, 64)
        );
    }

    #[test]
    fn from_analyses_uses_coverage_when_targets_given() {
        let targets = ["公众号", "排版"];
        let title = analyze_title("如何提升公众号写作的5个实用技巧", &targets);
        let content = analyze_content("写作很重要。", &targets);

        let score = SeoScore::from_analyses(&title, &content, true);
        assert_eq!(score.keywords, 50);
        assert_eq!(score.readability, content.readability_score);
    }

    #[test]
    fn from_analyses_defaults_keyword_score() {
        let none: &[&str] = &[];
        let title = analyze_title("标题", none);
        let content = analyze_content("写作很重要。", none);

        let score = SeoScore::from_analyses(&title, &content, false);
        assert_eq!(score.keywords, DEFAULT_KEYWORD_SCORE);
    }
}
