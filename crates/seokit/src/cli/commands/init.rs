//! Implementation of `seokit init`.

use std::{
    fs,
    path::{Path, PathBuf},
    process::ExitCode,
};

use seokit_config::{CONFIG_FILENAME, ConfigError, Template, global_config_path};
use tracing::debug;

use crate::cli::{args::InitCommand, context::CommandContext};

/// Writes a commented starter `.seokit.toml`.
pub fn run(ctx: &CommandContext, cmd: &InitCommand) -> ExitCode {
    let (path, template) = match destination(&ctx.cwd, cmd.global) {
        Ok(dest) => dest,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    if path.exists() && !cmd.force {
        eprintln!("error: {} already exists (use --force to overwrite)", path.display());
        return ExitCode::FAILURE;
    }

    debug!(path = %path.display(), ?template, "writing starter config");
    if let Err(e) = fs::write(&path, template.render()) {
        eprintln!("error: failed to write {}: {e}", path.display());
        return ExitCode::FAILURE;
    }

    println!("Created {}", path.display());
    println!("Every setting starts commented out; uncomment the ones to change.");
    ExitCode::SUCCESS
}

/// Picks the file to write and its template.
///
/// Running in the home directory writes the global file even without
/// `--global`, since a local file there would be the same path.
fn destination(cwd: &Path, global: bool) -> Result<(PathBuf, Template), ConfigError> {
    let global_path = global_config_path();
    let in_home = global_path
        .as_deref()
        .and_then(Path::parent)
        .is_some_and(|home| home == cwd);

    if global || in_home {
        let path = global_path.ok_or(ConfigError::NoHomeDirectory)?;
        Ok((path, Template::Global))
    } else {
        Ok((cwd.join(CONFIG_FILENAME), Template::Local))
    }
}
