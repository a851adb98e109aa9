//! Shared helpers for command implementations.

use std::{
    fs,
    io::{self, IsTerminal},
    process::ExitCode,
};

use seokit_config::Config;
use seokit_keywords::{KeywordAnalyzer, KeywordMethod, TextRankParams};
use seokit_score::{ContentScorer, KeywordStrategy, TitleScorer};

use crate::cli::args::{InputArgs, KeywordArgs, TargetArgs};

/// Keyword extraction setup after applying CLI overrides to config defaults.
pub struct KeywordSetup {
    /// Analyzer with the resolved method and TextRank parameters.
    pub analyzer: KeywordAnalyzer,
    /// Number of keywords to return.
    pub top_k: usize,
}

impl KeywordArgs {
    /// Builds the analyzer, taking each value from the flag when given and
    /// from `[keywords]` otherwise.
    pub fn resolve(&self, config: &Config) -> Result<KeywordSetup, ExitCode> {
        let settings = &config.keywords;
        let method = match self.method {
            Some(method) => method,
            None => settings.method.parse::<KeywordMethod>().map_err(|e| {
                eprintln!("error: invalid keywords.method in configuration: {e}");
                ExitCode::FAILURE
            })?,
        };
        let params = TextRankParams {
            window_size: self.window_size.unwrap_or(settings.window_size),
            damping: self.damping.unwrap_or(settings.damping),
            iterations: self.iterations.unwrap_or(settings.iterations),
        };

        Ok(KeywordSetup {
            analyzer: KeywordAnalyzer::with_params(params).with_method(method),
            top_k: self.top_k.unwrap_or(settings.top_k),
        })
    }
}

impl TargetArgs {
    /// Returns the flag targets when given, the configured targets otherwise.
    pub fn resolve(&self, config: &Config) -> Vec<String> {
        if self.targets.is_empty() {
            config.analysis.target_keywords.clone()
        } else {
            self.targets.clone()
        }
    }
}

impl InputArgs {
    /// Returns the positional text, the file contents, or standard input.
    pub fn read(&self) -> Result<String, ExitCode> {
        if let Some(text) = &self.text {
            return Ok(text.clone());
        }
        if let Some(path) = &self.file {
            return fs::read_to_string(path).map_err(|e| {
                eprintln!("error: failed to read {}: {e}", path.display());
                ExitCode::FAILURE
            });
        }

        let stdin = io::stdin();
        if stdin.is_terminal() {
            eprintln!("error: no input: pass text, --file, or pipe text to stdin");
            return Err(ExitCode::FAILURE);
        }
        io::read_to_string(stdin).map_err(|e| {
            eprintln!("error: failed to read stdin: {e}");
            ExitCode::FAILURE
        })
    }
}

/// Builds a title scorer for the given targets.
pub fn title_scorer(targets: &[String]) -> TitleScorer {
    TitleScorer::new().with_targets(targets)
}

/// Builds a content scorer from targets, keyword setup, and the extractor
/// flag or `[content]` default.
pub fn content_scorer(
    config: &Config,
    targets: &[String],
    setup: &KeywordSetup,
    extractor: Option<KeywordStrategy>,
) -> Result<ContentScorer, ExitCode> {
    let strategy = match extractor {
        Some(strategy) => strategy,
        None => config
            .content
            .extractor
            .parse::<KeywordStrategy>()
            .map_err(|e| {
                eprintln!("error: invalid content.extractor in configuration: {e}");
                ExitCode::FAILURE
            })?,
    };

    Ok(ContentScorer::new()
        .with_targets(targets)
        .with_strategy(strategy)
        .with_analyzer(setup.analyzer)
        .with_keyword_limit(setup.top_k))
}
