//! Optional annotations from an external enhancer.
//!
//! The rule-based analyses are always complete on their own. An
//! [`Enhancer`] can add free-form insights and per-keyword annotations on
//! top; those live in [`Annotations`] next to the untouched result, never
//! inside it. When the enhancer fails, the failure is logged and a fixed
//! fallback insight takes the place of its output.

use seokit_keywords::KeywordResult;
use serde::Serialize;
use tracing::warn;

use crate::{ContentAnalysis, EnhanceError, TitleAnalysis};

/// Insight reported when the enhancer is unavailable.
pub const FALLBACK_INSIGHT: &str = "AI分析暂时不可用，使用基础算法分析";

/// Tone of the context a keyword appears in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    /// Favorable.
    Positive,
    /// Neither favorable nor unfavorable.
    Neutral,
    /// Unfavorable.
    Negative,
}

/// Enhancer judgement about one keyword.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct KeywordAnnotation {
    /// Topical relevance in `0.0..=1.0`.
    pub relevance: f64,
    /// Tone of the surrounding text.
    pub sentiment: Sentiment,
}

/// A keyword paired with its annotation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnnotatedKeyword {
    /// The keyword text.
    pub keyword: String,
    /// The enhancer's annotation.
    pub annotation: KeywordAnnotation,
}

/// Everything an enhancer contributed to one analysis.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Annotations {
    /// Free-form observations.
    pub insights: Vec<String>,
    /// Per-keyword annotations, in keyword order.
    pub keywords: Vec<AnnotatedKeyword>,
    /// True when the enhancer failed and `insights` holds the fallback.
    pub fallback: bool,
}

impl Annotations {
    /// Annotations standing in for a failed enhancer.
    pub fn fallback() -> Self {
        Self {
            insights: vec![FALLBACK_INSIGHT.to_string()],
            keywords: Vec::new(),
            fallback: true,
        }
    }
}

/// A rule-based result with optional enhancer annotations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Enhanced<T> {
    /// The untouched rule-based result.
    #[serde(flatten)]
    pub result: T,
    /// Annotations, absent when no enhancer was used.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotations: Option<Annotations>,
}

impl<T> Enhanced<T> {
    /// Wraps a result without annotations.
    pub fn plain(result: T) -> Self {
        Self {
            result,
            annotations: None,
        }
    }
}

/// An external collaborator that comments on analysis results.
pub trait Enhancer {
    /// Returns observations about a title analysis.
    fn title_insights(&self, analysis: &TitleAnalysis) -> Result<Vec<String>, EnhanceError>;

    /// Returns observations about a content analysis.
    fn content_summary(&self, analysis: &ContentAnalysis) -> Result<Vec<String>, EnhanceError>;

    /// Judges one extracted keyword.
    fn annotate_keyword(&self, keyword: &KeywordResult)
    -> Result<KeywordAnnotation, EnhanceError>;
}

/// Attaches enhancer insights to a title analysis.
///
/// Without an enhancer the result is returned plain.
pub fn enhance_title<E>(analysis: TitleAnalysis, enhancer: Option<&E>) -> Enhanced<TitleAnalysis>
where
    E: Enhancer + ?Sized,
{
    let Some(enhancer) = enhancer else {
        return Enhanced::plain(analysis);
    };

    let annotations = match enhancer.title_insights(&analysis) {
        Ok(insights) => Annotations {
            insights,
            ..Annotations::default()
        },
        Err(err) => {
            warn!(error = %err, "title enhancement failed, using fallback");
            Annotations::fallback()
        }
    };

    Enhanced {
        result: analysis,
        annotations: Some(annotations),
    }
}

/// Attaches enhancer insights and keyword annotations to a content analysis.
///
/// Any failure discards everything the enhancer produced for this analysis
/// and substitutes the fallback annotations.
pub fn enhance_content<E>(
    analysis: ContentAnalysis,
    enhancer: Option<&E>,
) -> Enhanced<ContentAnalysis>
where
    E: Enhancer + ?Sized,
{
    let Some(enhancer) = enhancer else {
        return Enhanced::plain(analysis);
    };

    let annotations = match annotate_content(&analysis, enhancer) {
        Ok(annotations) => annotations,
        Err(err) => {
            warn!(error = %err, "content enhancement failed, using fallback");
            Annotations::fallback()
        }
    };

    Enhanced {
        result: analysis,
        annotations: Some(annotations),
    }
}

/// Collects the summary and every keyword annotation, stopping at the first error.
fn annotate_content<E>(analysis: &ContentAnalysis, enhancer: &E) -> Result<Annotations, EnhanceError>
where
    E: Enhancer + ?Sized,
{
    let insights = enhancer.content_summary(analysis)?;
    let keywords = analysis
        .keywords
        .iter()
        .map(|keyword| {
            Ok(AnnotatedKeyword {
                keyword: keyword.keyword.clone(),
                annotation: enhancer.annotate_keyword(keyword)?,
            })
        })
        .collect::<Result<Vec<_>, EnhanceError>>()?;

    Ok(Annotations {
        insights,
        keywords,
        fallback: false,
    })
}

#[cfg(test)]
mod test {
    use std::cell::Cell;

    use super::*;
    use crate::{analyze_content, analyze_title};

    /// Enhancer that answers everything.
    struct MockEnhancer;

    impl Enhancer for MockEnhancer {
        fn title_insights(&self, analysis: &TitleAnalysis) -> Result<Vec<String>, EnhanceError> {
            Ok(vec![format!("标题得分{}", analysis.score)])
        }

        fn content_summary(&self, analysis: &ContentAnalysis) -> Result<Vec<String>, EnhanceError> {
            Ok(vec![format!("共{}字", analysis.word_count)])
        }

        fn annotate_keyword(
            &self,
            keyword: &KeywordResult,
        ) -> Result<KeywordAnnotation, EnhanceError> {
            Ok(KeywordAnnotation {
                relevance: keyword.density / 100.0,
                sentiment: Sentiment::Neutral,
            })
        }
    }

    /// Enhancer that fails after a number of keyword annotations.
    struct FailingEnhancer {
        /// Keyword annotations allowed before failing.
        remaining: Cell<usize>,
    }

    impl Enhancer for FailingEnhancer {
        fn title_insights(&self, _: &TitleAnalysis) -> Result<Vec<String>, EnhanceError> {
            Err(EnhanceError::NotConfigured)
        }

        fn content_summary(&self, _: &ContentAnalysis) -> Result<Vec<String>, EnhanceError> {
            Ok(vec!["summary".into()])
        }

        fn annotate_keyword(&self, _: &KeywordResult) -> Result<KeywordAnnotation, EnhanceError> {
            let left = self.remaining.get();
            if left == 0 {
                return Err(EnhanceError::Request("timeout".into()));
            }
            self.remaining.set(left - 1);
            Ok(KeywordAnnotation {
                relevance: 1.0,
                sentiment: Sentiment::Positive,
            })
        }
    }

    /// No targets.
    const NONE: &[&str] = &[];
    /// Article body with repeated terms.
    const CONTENT: &str = "公众号运营需要写作技巧。写作技巧决定文章质量。";

    #[test]
    fn no_enhancer_returns_plain_result() {
        let analysis = analyze_title("公众号运营", NONE);
        let enhanced = enhance_title::<MockEnhancer>(analysis.clone(), None);

        assert_eq!(enhanced.result, analysis);
        assert!(enhanced.annotations.is_none());
    }

    #[test]
    fn title_insights_attached() {
        let enhanced = enhance_title(analyze_title("公众号运营", NONE), Some(&MockEnhancer));
        let annotations = enhanced.annotations.unwrap();

        assert_eq!(annotations.insights, vec![format!("标题得分{}", enhanced.result.score)]);
        assert!(!annotations.fallback);
    }

    #[test]
    fn title_failure_falls_back() {
        let analysis = analyze_title("公众号运营", NONE);
        let enhancer = FailingEnhancer {
            remaining: Cell::new(0),
        };
        let enhanced = enhance_title(analysis.clone(), Some(&enhancer));

        assert_eq!(enhanced.result, analysis);
        assert_eq!(enhanced.annotations, Some(Annotations::fallback()));
    }

    #[test]
    fn content_keywords_annotated_in_order() {
        let analysis = analyze_content(CONTENT, NONE);
        let enhanced = enhance_content(analysis.clone(), Some(&MockEnhancer));
        let annotations = enhanced.annotations.unwrap();

        let annotated: Vec<_> = annotations.keywords.iter().map(|k| k.keyword.as_str()).collect();
        let extracted: Vec<_> = analysis.keywords.iter().map(|k| k.keyword.as_str()).collect();
        assert_eq!(annotated, extracted);
        assert_eq!(annotations.insights, vec![format!("共{}字", analysis.word_count)]);
    }

    #[test]
    fn partial_keyword_failure_discards_annotations() {
        let analysis = analyze_content(CONTENT, NONE);
        assert!(analysis.keywords.len() > 1);

        let enhancer = FailingEnhancer {
            remaining: Cell::new(1),
        };
        let enhanced = enhance_content(analysis.clone(), Some(&enhancer));

        assert_eq!(enhanced.result, analysis);
        let annotations = enhanced.annotations.unwrap();
        assert!(annotations.fallback);
        assert!(annotations.keywords.is_empty());
        assert_eq!(annotations.insights, vec![FALLBACK_INSIGHT]);
    }

    #[test]
    fn dyn_enhancer_accepted() {
        let enhancer: &dyn Enhancer = &MockEnhancer;
        let enhanced = enhance_title(analyze_title("标题", NONE), Some(enhancer));
        assert!(enhanced.annotations.is_some());
    }

    #[test]
    fn serializes_flattened() {
        let enhanced = enhance_title(analyze_title("标题", NONE), Some(&MockEnhancer));
        let json = serde_json::to_value(&enhanced).unwrap();

        assert_eq!(json["title"], "标题");
        assert!(json["annotations"]["insights"].is_array());

        let plain = serde_json::to_value(Enhanced::plain(analyze_title("标题", NONE))).unwrap();
        assert!(plain.get("annotations").is_none());
    }
}
