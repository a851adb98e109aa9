//! Title scoring rules and rewritten variants.

use std::cmp::Reverse;

use serde::Serialize;
use tracing::debug;

use crate::{
    findings::Findings,
    markers::{EMOTIONAL_WORDS, HIGH_VALUE_WORDS, QUESTION_WORDS, contains_any, has_digit},
};

/// Shortest title length, in characters, that avoids the length penalty.
pub const TITLE_MIN_CHARS: usize = 15;
/// Longest title length, in characters, that avoids the length penalty.
pub const TITLE_MAX_CHARS: usize = 25;

/// Penalty for a title under [`TITLE_MIN_CHARS`].
const SHORT_PENALTY: i32 = -15;
/// Penalty for a title over [`TITLE_MAX_CHARS`].
const LONG_PENALTY: i32 = -10;
/// Penalty when no target keyword appears.
const NO_COVERAGE_PENALTY: i32 = -20;
/// Penalty when fewer than half the target keywords appear.
const PARTIAL_COVERAGE_PENALTY: i32 = -5;
/// Coverage percentage under which the partial penalty applies.
const PARTIAL_COVERAGE_THRESHOLD: f64 = 50.0;
/// Penalty when no high-value word appears.
const NO_HIGH_VALUE_PENALTY: i32 = -5;
/// Bonus for a question word.
const QUESTION_BONUS: i32 = 5;
/// Bonus for an emotional word.
const EMOTIONAL_BONUS: i32 = 3;
/// Bonus for a digit.
const DIGIT_BONUS: i32 = 5;

/// Result of scoring one title.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TitleAnalysis {
    /// The title as given.
    pub title: String,
    /// Rule score in `0..=100`.
    pub score: u32,
    /// Problems found.
    pub issues: Vec<String>,
    /// Advice, without duplicates.
    pub suggestions: Vec<String>,
    /// Percentage of target keywords present in the title; 0 without targets.
    pub keyword_density: f64,
    /// Title length in characters.
    pub length: usize,
    /// Rewritten titles, best first.
    pub optimized_versions: Vec<OptimizedTitle>,
}

/// A rewritten title with its score and a description of what changed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptimizedTitle {
    /// The rewritten title.
    pub title: String,
    /// Score of the rewritten title under the same rules.
    pub score: u32,
    /// What the rewrite added.
    pub changes: Vec<String>,
}

/// Outcome of the rule table for one title, before variants are generated.
struct Evaluation {
    /// Clamped score.
    score: u32,
    /// Problems found.
    issues: Vec<String>,
    /// Deduplicated advice.
    suggestions: Vec<String>,
    /// Target keyword coverage percentage.
    coverage: f64,
}

/// Title scorer configured with the keywords the article targets.
#[derive(Debug, Clone, Default)]
pub struct TitleScorer {
    /// Non-blank target keywords.
    target_keywords: Vec<String>,
}

impl TitleScorer {
    /// Creates a scorer with no target keywords.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the target keywords. Blank entries are ignored.
    pub fn with_targets<S: AsRef<str>>(mut self, targets: &[S]) -> Self {
        self.target_keywords = targets
            .iter()
            .map(AsRef::as_ref)
            .filter(|t| !t.trim().is_empty())
            .map(String::from)
            .collect();
        self
    }

    /// Returns the target keywords in use.
    pub fn targets(&self) -> &[String] {
        &self.target_keywords
    }

    /// Scores a title and generates optimized variants.
    pub fn analyze(&self, title: &str) -> TitleAnalysis {
        let evaluation = self.evaluate(title);
        let optimized_versions = self.optimized_versions(title);

        debug!(
            length = title.chars().count(),
            score = evaluation.score,
            variants = optimized_versions.len(),
            "analyzed title"
        );

        TitleAnalysis {
            title: title.to_string(),
            score: evaluation.score,
            issues: evaluation.issues,
            suggestions: evaluation.suggestions,
            keyword_density: evaluation.coverage,
            length: title.chars().count(),
            optimized_versions,
        }
    }

    /// Percentage of target keywords found in the title, case-insensitively.
    ///
    /// Each target counts at most once. Returns 0 when there are no targets.
    pub fn coverage(&self, title: &str) -> f64 {
        if self.target_keywords.is_empty() {
            return 0.0;
        }
        let lowered = title.to_lowercase();
        let found = self
            .target_keywords
            .iter()
            .filter(|target| lowered.contains(&target.to_lowercase()))
            .count();
        found as f64 / self.target_keywords.len() as f64 * 100.0
    }

    /// Applies the rule table to a title.
    fn evaluate(&self, title: &str) -> Evaluation {
        let mut findings = Findings::new();
        let length = title.chars().count();

        if length < TITLE_MIN_CHARS {
            findings.issue("标题过短，可能影响信息传达");
            findings.suggest("建议增加描述性词汇，长度控制在15-25字");
            findings.adjust(SHORT_PENALTY);
        } else if length > TITLE_MAX_CHARS {
            findings.issue("标题过长，可能在搜索结果中被截断");
            findings.suggest("建议精简表达，突出核心关键词");
            findings.adjust(LONG_PENALTY);
        }

        let coverage = self.coverage(title);
        if !self.target_keywords.is_empty() {
            if coverage == 0.0 {
                findings.issue("标题中未包含目标关键词");
                findings.suggest("建议在标题中自然融入主要关键词");
                findings.adjust(NO_COVERAGE_PENALTY);
            } else if coverage < PARTIAL_COVERAGE_THRESHOLD {
                findings.suggest("可以增加更多相关关键词");
                findings.adjust(PARTIAL_COVERAGE_PENALTY);
            }
        }

        if !contains_any(title, HIGH_VALUE_WORDS) {
            findings.suggest("添加\"如何\"、\"方法\"、\"技巧\"等高价值词汇可提升点击率");
            findings.adjust(NO_HIGH_VALUE_PENALTY);
        }

        if contains_any(title, QUESTION_WORDS) {
            findings.adjust(QUESTION_BONUS);
        }

        if contains_any(title, EMOTIONAL_WORDS) {
            findings.adjust(EMOTIONAL_BONUS);
        } else {
            findings.suggest("适当添加情感词汇如\"实用\"、\"高效\"可增加吸引力");
        }

        if has_digit(title) {
            findings.adjust(DIGIT_BONUS);
        } else {
            findings.suggest("添加具体数字可以提升吸引力，如\"5个方法\"、\"10个技巧\"");
        }

        let (score, issues, suggestions) = findings.finish();
        Evaluation {
            score,
            issues,
            suggestions,
            coverage,
        }
    }

    /// Generates rewrites for each marker the title lacks, best first.
    ///
    /// Variants are scored with the same rules and targets but do not get
    /// variants of their own.
    fn optimized_versions(&self, title: &str) -> Vec<OptimizedTitle> {
        let mut candidates = Vec::new();

        if !contains_any(title, QUESTION_WORDS) {
            candidates.push((format!("如何{title}"), "添加疑问词\"如何\"提升搜索匹配度"));
        }
        if !has_digit(title) {
            candidates.push((format!("5个{title}的方法"), "添加具体数字增加吸引力"));
        }
        if !contains_any(title, EMOTIONAL_WORDS) {
            candidates.push((format!("实用的{title}技巧"), "添加情感词\"实用\"增强吸引力"));
        }

        let mut optimized: Vec<OptimizedTitle> = candidates
            .into_iter()
            .map(|(rewritten, change)| OptimizedTitle {
                score: self.evaluate(&rewritten).score,
                title: rewritten,
                changes: vec![change.to_string()],
            })
            .collect();

        optimized.sort_by_key(|o| Reverse(o.score));
        optimized
    }
}

/// Scores a title against the given target keywords.
pub fn analyze_title<S: AsRef<str>>(title: &str, target_keywords: &[S]) -> TitleAnalysis {
    TitleScorer::new().with_targets(target_keywords).analyze(title)
}
