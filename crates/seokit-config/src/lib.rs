//! Configuration system for seokit.
//!
//! seokit uses TOML configuration files named `.seokit.toml`. Configuration is
//! resolved by walking up the directory tree from the current working
//! directory, collecting any `.seokit.toml` files found, then loading
//! `~/.seokit.toml` as the global config with lowest precedence.

#![warn(missing_docs)]

mod discovery;
mod error;
mod merge;
mod parse;
mod templates;
#[cfg(test)]
mod test_support;
mod validate;

use std::path::{Path, PathBuf};

pub use discovery::{CONFIG_FILENAME, discover_config_files, global_config_path, is_global_config};
pub use error::ConfigError;
pub use merge::{ParsedConfig, merge_configs};
pub use parse::{
    RawAnalysisSettings, RawConfig, RawContentSettings, RawKeywordSettings, parse_config_file,
    parse_config_str,
};
use serde::{Deserialize, Serialize};
pub use templates::Template;
pub use validate::ConfigWarning;
use validate::validate_config;

/// Top-level merged configuration for seokit.
///
/// This represents the fully resolved configuration after merging all
/// discovered `.seokit.toml` files according to precedence rules.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Keyword extraction settings.
    pub keywords: KeywordSettings,
    /// Content analysis settings.
    pub content: ContentSettings,
    /// Scoring inputs shared by title and content analysis.
    pub analysis: AnalysisSettings,
    /// Directory containing the most specific config file.
    pub config_root: Option<PathBuf>,
}

impl Config {
    /// Loads configuration by discovering and merging all relevant `.seokit.toml` files.
    ///
    /// Returns the default configuration when no files are found.
    pub fn load(cwd: &Path) -> Result<Self, ConfigError> {
        let config_files = discover_config_files(cwd);
        Self::load_from_files(&config_files)
    }

    /// Loads configuration from a specific list of config file paths.
    ///
    /// Files should be provided in precedence order: highest precedence first.
    /// Returns `Ok(Config::default())` if the list is empty.
    pub fn load_from_files(files: &[PathBuf]) -> Result<Self, ConfigError> {
        let parsed: Vec<ParsedConfig> = files
            .iter()
            .map(|path| {
                let config = parse_config_file(path)?;
                Ok(ParsedConfig {
                    path: path.clone(),
                    config,
                })
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;

        Ok(merge_configs(&parsed))
    }

    /// Validates the configuration and returns any warnings.
    pub fn validate(&self) -> Vec<ConfigWarning> {
        validate_config(self)
    }

    /// Serializes the effective settings to TOML format.
    ///
    /// The output has the same layout as a `.seokit.toml` file.
    pub fn settings_to_toml(&self) -> Result<String, ConfigError> {
        let serializable = SerializableSettings {
            keywords: &self.keywords,
            content: &self.content,
            analysis: &self.analysis,
        };
        Ok(toml::to_string_pretty(&serializable)?)
    }
}

/// Keyword extraction settings.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct KeywordSettings {
    /// Extraction method: `tfidf`, `textrank` or `combined`.
    pub method: String,
    /// Number of keywords to return.
    pub top_k: usize,
    /// Tokens on each side of a position that count as co-occurring.
    pub window_size: usize,
    /// TextRank damping factor.
    pub damping: f64,
    /// TextRank propagation rounds.
    pub iterations: usize,
}

impl Default for KeywordSettings {
    fn default() -> Self {
        Self {
            method: String::from("combined"),
            top_k: 15,
            window_size: 5,
            damping: 0.85,
            iterations: 50,
        }
    }
}

/// Content analysis settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ContentSettings {
    /// Keyword source for content reports: `analyzer` or `frequency`.
    pub extractor: String,
}

impl Default for ContentSettings {
    fn default() -> Self {
        Self {
            extractor: String::from("analyzer"),
        }
    }
}

/// Scoring inputs shared by title and content analysis.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct AnalysisSettings {
    /// Keywords the article is expected to rank for.
    pub target_keywords: Vec<String>,
}

/// Internal struct for TOML serialization of settings.
#[derive(Serialize)]
struct SerializableSettings<'a> {
    /// Keyword extraction settings.
    keywords: &'a KeywordSettings,
    /// Content analysis settings.
    content: &'a ContentSettings,
    /// Scoring inputs.
    analysis: &'a AnalysisSettings,
}
