//! Per-invocation state shared by every command.

use std::{env, path::PathBuf, process::ExitCode};

use seokit_config::Config;
use tracing::debug;

/// Working directory and merged configuration for one run.
pub struct CommandContext {
    /// Directory the command was started in.
    pub cwd: PathBuf,
    /// Merged `.seokit.toml` settings, or defaults when none were loaded.
    pub config: Config,
}

impl CommandContext {
    /// Resolves the working directory and loads the configuration found there.
    pub fn load() -> Result<Self, ExitCode> {
        Self::build(true)
    }

    /// Resolves the working directory and uses default settings.
    ///
    /// For commands that must run even when a config file is broken.
    pub fn load_cwd_only() -> Result<Self, ExitCode> {
        Self::build(false)
    }

    /// Shared constructor; prints the failure before returning it.
    fn build(with_config: bool) -> Result<Self, ExitCode> {
        let cwd = env::current_dir().map_err(|e| {
            eprintln!("error: could not determine current directory: {e}");
            ExitCode::FAILURE
        })?;

        let config = if with_config {
            Config::load(&cwd).map_err(|e| {
                eprintln!("error: failed to load configuration: {e}");
                ExitCode::FAILURE
            })?
        } else {
            Config::default()
        };
        debug!(cwd = %cwd.display(), root = ?config.config_root, with_config, "command context ready");

        Ok(Self { cwd, config })
    }
}
