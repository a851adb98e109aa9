//! Content scoring rules.

use std::{fmt, str};

use regex::RegexBuilder;
use seokit_keywords::{FrequencyCounter, KeywordAnalyzer, KeywordExtractor, KeywordResult};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{findings::Findings, readability::calculate_readability};

/// Content shorter than this many characters is penalized.
pub const CONTENT_MIN_CHARS: usize = 300;
/// Content longer than this many characters gets a structure suggestion.
pub const CONTENT_MAX_CHARS: usize = 2000;

/// Content longer than this needs headings or list markers.
const STRUCTURE_MIN_CHARS: usize = 500;
/// Target keyword density below which the content is penalized.
const DENSITY_LOW: f64 = 1.0;
/// Target keyword density above which the content is penalized.
const DENSITY_HIGH: f64 = 5.0;
/// Readability below which the content is penalized.
const READABILITY_THRESHOLD: u32 = 60;
/// Default number of keywords reported for content.
const DEFAULT_KEYWORD_LIMIT: usize = 15;

/// Penalty for short content.
const SHORT_PENALTY: i32 = -20;
/// Penalty for target density under [`DENSITY_LOW`].
const LOW_DENSITY_PENALTY: i32 = -15;
/// Penalty for target density over [`DENSITY_HIGH`].
const HIGH_DENSITY_PENALTY: i32 = -10;
/// Penalty for low readability.
const READABILITY_PENALTY: i32 = -10;
/// Penalty for long content without structure.
const STRUCTURE_PENALTY: i32 = -5;

/// Keyword source for content analysis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeywordStrategy {
    /// The configured [`KeywordAnalyzer`].
    #[default]
    Analyzer,
    /// Raw n-gram counting with [`FrequencyCounter`].
    Frequency,
}

impl fmt::Display for KeywordStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Analyzer => write!(f, "analyzer"),
            Self::Frequency => write!(f, "frequency"),
        }
    }
}

impl str::FromStr for KeywordStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "analyzer" => Ok(Self::Analyzer),
            "frequency" => Ok(Self::Frequency),
            _ => Err(format!(
                "unknown extractor '{s}', expected one of: analyzer, frequency"
            )),
        }
    }
}

/// Result of scoring one article body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContentAnalysis {
    /// Rule score in `0..=100`.
    pub score: u32,
    /// Content length in characters.
    pub word_count: usize,
    /// Extracted keywords.
    pub keywords: Vec<KeywordResult>,
    /// Readability in `0..=100`.
    pub readability_score: u32,
    /// Problems found.
    pub issues: Vec<String>,
    /// Advice, without duplicates.
    pub suggestions: Vec<String>,
}

/// Content scorer: target keywords plus the keyword extraction setup.
#[derive(Debug, Clone)]
pub struct ContentScorer {
    /// Non-blank target keywords.
    target_keywords: Vec<String>,
    /// Which extractor produces the keyword list.
    strategy: KeywordStrategy,
    /// Extractor used by [`KeywordStrategy::Analyzer`].
    analyzer: KeywordAnalyzer,
    /// Extractor used by [`KeywordStrategy::Frequency`].
    frequency: FrequencyCounter,
    /// Number of keywords reported.
    keyword_limit: usize,
}

impl Default for ContentScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentScorer {
    /// Creates a scorer using the combined analyzer and no target keywords.
    pub fn new() -> Self {
        Self {
            target_keywords: Vec::new(),
            strategy: KeywordStrategy::default(),
            analyzer: KeywordAnalyzer::new(),
            frequency: FrequencyCounter::new(),
            keyword_limit: DEFAULT_KEYWORD_LIMIT,
        }
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

    /// Selects the keyword source.
    pub fn with_strategy(mut self, strategy: KeywordStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Replaces the analyzer used by [`KeywordStrategy::Analyzer`].
    pub fn with_analyzer(mut self, analyzer: KeywordAnalyzer) -> Self {
        self.analyzer = analyzer;
        self
    }

    /// Sets how many keywords are reported.
    pub fn with_keyword_limit(mut self, limit: usize) -> Self {
        self.keyword_limit = limit;
        self
    }

    /// Returns the target keywords in use.
    pub fn targets(&self) -> &[String] {
        &self.target_keywords
    }

    /// Returns the keyword source.
    pub fn strategy(&self) -> KeywordStrategy {
        self.strategy
    }

    /// Scores a body of text.
    pub fn analyze(&self, content: &str) -> ContentAnalysis {
        let mut findings = Findings::new();
        let word_count = content.chars().count();

        if word_count < CONTENT_MIN_CHARS {
            findings.issue("内容过短，搜索引擎可能认为内容价值不高");
            findings.suggest("建议内容至少300字以上，提供更丰富的信息");
            findings.adjust(SHORT_PENALTY);
        } else if word_count > CONTENT_MAX_CHARS {
            findings.suggest("内容较长，建议添加小标题和段落分隔，提升可读性");
        }

        let keywords = self.extract_keywords(content);

        if let Some(density) = self.keyword_density(content) {
            if density < DENSITY_LOW {
                findings.issue("目标关键词密度过低");
                findings.suggest("适当增加目标关键词的使用频率，建议密度在1-3%之间");
                findings.adjust(LOW_DENSITY_PENALTY);
            } else if density > DENSITY_HIGH {
                findings.issue("关键词密度过高，可能被认为是关键词堆砌");
                findings.suggest("减少关键词使用频率，保持自然的表达方式");
                findings.adjust(HIGH_DENSITY_PENALTY);
            }
        }

        let readability_score = calculate_readability(content);
        if readability_score < READABILITY_THRESHOLD {
            findings.issue("内容可读性较低");
            findings.suggest("使用shorter sentences, 添加标点符号，使用简单词汇");
            findings.adjust(READABILITY_PENALTY);
        }

        if !has_structure(content) && word_count > STRUCTURE_MIN_CHARS {
            findings.suggest("添加小标题或列表结构，提升内容组织性");
            findings.adjust(STRUCTURE_PENALTY);
        }

        let (score, issues, suggestions) = findings.finish();
        debug!(
            chars = word_count,
            keywords = keywords.len(),
            readability = readability_score,
            score,
            "analyzed content"
        );

        ContentAnalysis {
            score,
            word_count,
            keywords,
            readability_score,
            issues,
            suggestions,
        }
    }

    /// Extracts keywords with the configured strategy.
    pub fn extract_keywords(&self, content: &str) -> Vec<KeywordResult> {
        match self.strategy {
            KeywordStrategy::Analyzer => self.analyzer.extract(content, self.keyword_limit),
            KeywordStrategy::Frequency => self.frequency.extract(content, self.keyword_limit),
        }
    }

    /// Computes the target keyword density.
    ///
    /// `matches × chars(concatenated targets) / chars(content) × 100`, where
    /// matches are case-insensitive literal occurrences of every target.
    /// Returns `None` when there are no targets or the content is empty.
    pub fn keyword_density(&self, content: &str) -> Option<f64> {
        let length = content.chars().count();
        if self.target_keywords.is_empty() || length == 0 {
            return None;
        }

        let mut matches = 0;
        for target in &self.target_keywords {
            match RegexBuilder::new(&regex::escape(target))
                .case_insensitive(true)
                .build()
            {
                Ok(pattern) => matches += pattern.find_iter(content).count(),
                Err(err) => warn!(target = %target, error = %err, "skipping target keyword"),
            }
        }

        let joined: usize = self.target_keywords.iter().map(|t| t.chars().count()).sum();
        Some(matches as f64 * joined as f64 / length as f64 * 100.0)
    }
}

/// Scores content against the given target keywords with default settings.
pub fn analyze_content<S: AsRef<str>>(content: &str, target_keywords: &[S]) -> ContentAnalysis {
    ContentScorer::new().with_targets(target_keywords).analyze(content)
}

/// Returns true if the content has a Markdown heading or a numbered list marker.
///
/// A heading is `#` followed by whitespace; a list marker is a digit, then `、`
/// or `.`, then whitespace.
fn has_structure(content: &str) -> bool {
    let chars: Vec<char> = content.chars().collect();
    let heading = chars
        .windows(2)
        .any(|w| w[0] == '#' && w[1].is_whitespace());
    let list = chars
        .windows(3)
        .any(|w| w[0].is_ascii_digit() && matches!(w[1], '、' | '.') && w[2].is_whitespace());
    heading || list
}
