//! Implementation of `seokit check`.

use std::process::ExitCode;

use seokit_config::{Config, ConfigWarning, discover_config_files, is_global_config};

use crate::cli::context::CommandContext;

/// Exit codes for `seokit check`.
mod exit_codes {
    use std::process::ExitCode;

    /// Configuration is valid with no warnings.
    pub const OK: ExitCode = ExitCode::SUCCESS;
    /// Configuration has warnings but is usable.
    pub const WARNINGS: ExitCode = ExitCode::FAILURE;
    /// Configuration has errors and cannot be used.
    pub const ERROR: ExitCode = ExitCode::FAILURE;
}

/// Validates the configuration and reports any issues.
pub fn run(ctx: &CommandContext) -> ExitCode {
    let config_files = discover_config_files(&ctx.cwd);

    println!("Checking configuration...");
    println!();

    if config_files.is_empty() {
        println!("No configuration files found.");
        println!();
        println!("Run 'seokit init' to create a configuration file.");
        return exit_codes::OK;
    }

    println!("Config files (highest precedence first):");
    for path in &config_files {
        if is_global_config(path) {
            println!("  {} (global)", path.display());
        } else {
            println!("  {}", path.display());
        }
    }
    println!();

    let config = match Config::load_from_files(&config_files) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e}");
            if let Some(path) = e.path() {
                eprintln!("fix or remove {} and run 'seokit check' again", path.display());
            }
            return exit_codes::ERROR;
        }
    };

    let warnings = config.validate();
    if warnings.is_empty() {
        println!("No issues found.");
        return exit_codes::OK;
    }

    println!("Warnings ({}):", warnings.len());
    for warning in &warnings {
        println!("  - {warning}");
    }
    println!();

    print_hints(&warnings);

    exit_codes::WARNINGS
}

/// Prints hints for resolving common warnings.
fn print_hints(warnings: &[ConfigWarning]) {
    let mut hints = Vec::new();

    for warning in warnings {
        let hint = match warning {
            ConfigWarning::UnknownMethod { .. } => {
                "Set keywords.method to tfidf, textrank, or combined."
            }
            ConfigWarning::UnknownExtractor { .. } => {
                "Set content.extractor to analyzer or frequency."
            }
            ConfigWarning::DampingOutOfRange { .. } => {
                "Use a damping factor such as 0.85; values outside (0, 1) distort textrank."
            }
            ConfigWarning::ZeroTopK
            | ConfigWarning::ZeroIterations
            | ConfigWarning::ZeroWindowSize => {
                "Remove zero-valued [keywords] settings to fall back to the defaults."
            }
            ConfigWarning::BlankTargetKeyword => {
                "Remove empty strings from analysis.target_keywords."
            }
        };
        hints.push(hint);
    }

    hints.sort_unstable();
    hints.dedup();

    if !hints.is_empty() {
        println!("Hints:");
        for hint in hints {
            println!("  - {hint}");
        }
    }
}
