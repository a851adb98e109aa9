//! Configuration merging.
//!
//! Merges multiple `RawConfig` files into a single resolved `Config`,
//! applying precedence rules.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::{
    AnalysisSettings, Config, ContentSettings, KeywordSettings,
    parse::{RawAnalysisSettings, RawConfig, RawContentSettings, RawKeywordSettings},
};

/// A parsed config file with its source path.
pub struct ParsedConfig {
    /// Path to the config file.
    pub path: PathBuf,
    /// Parsed raw configuration.
    pub config: RawConfig,
}

/// Merges multiple configuration files into a single resolved `Config`.
///
/// Configs should be provided in precedence order: highest precedence first
/// (closest to CWD), lowest precedence last (global config). Every field takes
/// the first defined value; `target_keywords` is replaced as a whole, never
/// concatenated.
pub fn merge_configs(configs: &[ParsedConfig]) -> Config {
    if configs.is_empty() {
        return Config::default();
    }

    let mut config = Config {
        config_root: configs
            .first()
            .and_then(|c| c.path.parent())
            .map(Path::to_path_buf),
        ..Config::default()
    };

    // Lowest precedence first so higher precedence overwrites.
    for parsed in configs.iter().rev() {
        let raw = &parsed.config;
        if let Some(ref keywords) = raw.keywords {
            apply_raw_keywords(&mut config.keywords, keywords);
        }
        if let Some(ref content) = raw.content {
            apply_raw_content(&mut config.content, content);
        }
        if let Some(ref analysis) = raw.analysis {
            apply_raw_analysis(&mut config.analysis, analysis);
        }
    }

    debug!(files = configs.len(), "merged config files");
    config
}

/// Applies raw keyword settings, overwriting any present values.
fn apply_raw_keywords(result: &mut KeywordSettings, raw: &RawKeywordSettings) {
    if let Some(ref v) = raw.method {
        result.method.clone_from(v);
    }
    if let Some(v) = raw.top_k {
        result.top_k = v;
    }
    if let Some(v) = raw.window_size {
        result.window_size = v;
    }
    if let Some(v) = raw.damping {
        result.damping = v;
    }
    if let Some(v) = raw.iterations {
        result.iterations = v;
    }
}

/// Applies raw content settings, overwriting any present values.
fn apply_raw_content(result: &mut ContentSettings, raw: &RawContentSettings) {
    if let Some(ref v) = raw.extractor {
        result.extractor.clone_from(v);
    }
}

/// Applies raw analysis settings, overwriting any present values.
fn apply_raw_analysis(result: &mut AnalysisSettings, raw: &RawAnalysisSettings) {
    if let Some(ref v) = raw.target_keywords {
        result.target_keywords.clone_from(v);
    }
}
