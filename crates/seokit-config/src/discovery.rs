//! Locating `.seokit.toml` files.
//!
//! Every ancestor of the working directory may hold a config file. The walk
//! ends at the first file marked `root = true`; otherwise `~/.seokit.toml` is
//! appended as the weakest layer.

use std::path::{Path, PathBuf};

use directories::BaseDirs;
use tracing::debug;

use crate::parse::is_root_config;

/// The configuration filename.
pub const CONFIG_FILENAME: &str = ".seokit.toml";

/// Returns the config files that apply to `cwd`, strongest first.
///
/// Returns an empty vector if no configuration files are found.
pub fn discover_config_files(cwd: &Path) -> Vec<PathBuf> {
    let (mut configs, sealed) = ancestor_configs(cwd);

    if !sealed
        && let Some(global) = global_config_path().filter(|p| p.is_file())
        && !configs.contains(&global)
    {
        configs.push(global);
    }

    debug!(
        cwd = %cwd.display(),
        count = configs.len(),
        sealed,
        "discovered config files"
    );
    configs
}

/// Collects config files from `cwd` upward.
///
/// The flag is true when a `root = true` file ended the walk.
fn ancestor_configs(cwd: &Path) -> (Vec<PathBuf>, bool) {
    let mut configs = Vec::new();
    for dir in cwd.ancestors() {
        let candidate = dir.join(CONFIG_FILENAME);
        if !candidate.is_file() {
            continue;
        }
        let sealed = is_root_config(&candidate);
        configs.push(candidate);
        if sealed {
            return (configs, true);
        }
    }
    (configs, false)
}

/// Returns `~/.seokit.toml`, or `None` without a home directory.
pub fn global_config_path() -> Option<PathBuf> {
    BaseDirs::new().map(|dirs| dirs.home_dir().join(CONFIG_FILENAME))
}

/// Returns true if `path` is the global config file.
pub fn is_global_config(path: &Path) -> bool {
    global_config_path().is_some_and(|global| path == global)
}
