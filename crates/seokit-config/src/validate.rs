//! Configuration validation.
//!
//! Validates a loaded configuration and reports warnings for potential issues.

use std::fmt;

use crate::Config;

/// Accepted spellings of the keyword extraction method.
const KEYWORD_METHODS: &[&str] = &[
    "tfidf",
    "tf-idf",
    "tf_idf",
    "textrank",
    "text-rank",
    "text_rank",
    "combined",
];

/// Accepted content keyword extractors.
const CONTENT_EXTRACTORS: &[&str] = &["analyzer", "frequency"];

/// A non-fatal warning about the configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigWarning {
    /// The keyword method is not recognized.
    UnknownMethod {
        /// Configured method name.
        method: String,
    },
    /// The content extractor is not recognized.
    UnknownExtractor {
        /// Configured extractor name.
        extractor: String,
    },
    /// The damping factor lies outside the open interval (0, 1).
    DampingOutOfRange {
        /// Configured damping factor.
        value: f64,
    },
    /// `top_k` is zero, so no keywords would ever be returned.
    ZeroTopK,
    /// `iterations` is zero, so TextRank never propagates rank.
    ZeroIterations,
    /// `window_size` is zero, so the co-occurrence graph has no edges.
    ZeroWindowSize,
    /// A target keyword is empty or whitespace.
    BlankTargetKeyword,
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownMethod { method } => write!(
                f,
                "unknown keyword method '{method}', expected one of: tfidf, textrank, combined"
            ),
            Self::UnknownExtractor { extractor } => write!(
                f,
                "unknown content extractor '{extractor}', expected one of: {}",
                CONTENT_EXTRACTORS.join(", ")
            ),
            Self::DampingOutOfRange { value } => {
                write!(f, "damping factor {value} should be between 0 and 1")
            }
            Self::ZeroTopK => write!(f, "keywords.top_k is 0, no keywords will be returned"),
            Self::ZeroIterations => {
                write!(f, "keywords.iterations is 0, textrank ranks will not change")
            }
            Self::ZeroWindowSize => {
                write!(f, "keywords.window_size is 0, textrank graph will have no edges")
            }
            Self::BlankTargetKeyword => {
                write!(f, "analysis.target_keywords contains a blank entry")
            }
        }
    }
}

/// Validates the configuration and returns any warnings.
pub fn validate_config(config: &Config) -> Vec<ConfigWarning> {
    let mut warnings = Vec::new();
    let keywords = &config.keywords;

    if !KEYWORD_METHODS.contains(&keywords.method.to_lowercase().as_str()) {
        warnings.push(ConfigWarning::UnknownMethod {
            method: keywords.method.clone(),
        });
    }
    if !CONTENT_EXTRACTORS.contains(&config.content.extractor.to_lowercase().as_str()) {
        warnings.push(ConfigWarning::UnknownExtractor {
            extractor: config.content.extractor.clone(),
        });
    }
    if !(keywords.damping > 0.0 && keywords.damping < 1.0) {
        warnings.push(ConfigWarning::DampingOutOfRange {
            value: keywords.damping,
        });
    }
    if keywords.top_k == 0 {
        warnings.push(ConfigWarning::ZeroTopK);
    }
    if keywords.iterations == 0 {
        warnings.push(ConfigWarning::ZeroIterations);
    }
    if keywords.window_size == 0 {
        warnings.push(ConfigWarning::ZeroWindowSize);
    }
    if config
        .analysis
        .target_keywords
        .iter()
        .any(|k| k.trim().is_empty())
    {
        warnings.push(ConfigWarning::BlankTargetKeyword);
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_default_config() {
        assert!(Config::default().validate().is_empty());
    }

    #[test]
    fn test_validate_method_aliases() {
        let mut config = Config::default();
        for method in ["TF-IDF", "text_rank", "Combined"] {
            config.keywords.method = method.into();
            assert!(config.validate().is_empty(), "{method} rejected");
        }
    }

    #[test]
    fn test_validate_unknown_names() {
        let mut config = Config::default();
        config.keywords.method = "bm25".into();
        config.content.extractor = "ai".into();

        let warnings = config.validate();
        assert!(warnings.contains(&ConfigWarning::UnknownMethod {
            method: "bm25".into()
        }));
        assert!(warnings.contains(&ConfigWarning::UnknownExtractor {
            extractor: "ai".into()
        }));
    }

    #[test]
    fn test_validate_damping_bounds() {
        let mut config = Config::default();
        for value in [0.0, 1.0, 1.5, -0.2] {
            config.keywords.damping = value;
            assert_eq!(
                config.validate(),
                vec![ConfigWarning::DampingOutOfRange { value }]
            );
        }
    }

    #[test]
    fn test_validate_zero_values() {
        let mut config = Config::default();
        config.keywords.top_k = 0;
        config.keywords.iterations = 0;
        config.keywords.window_size = 0;

        assert_eq!(
            config.validate(),
            vec![
                ConfigWarning::ZeroTopK,
                ConfigWarning::ZeroIterations,
                ConfigWarning::ZeroWindowSize,
            ]
        );
    }

    #[test]
    fn test_validate_blank_target_keyword() {
        let mut config = Config::default();
        config.analysis.target_keywords = vec!["写作".into(), "  ".into()];
        assert_eq!(config.validate(), vec![ConfigWarning::BlankTargetKeyword]);
    }

    #[test]
    fn test_warning_display() {
        let warning = ConfigWarning::DampingOutOfRange { value: 1.5 };
        assert_eq!(
            warning.to_string(),
            "damping factor 1.5 should be between 0 and 1"
        );
    }
}
