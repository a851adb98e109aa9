//! Configuration errors.

use std::{
    io,
    path::{Path, PathBuf},
};

use thiserror::Error;
use toml::{de, ser};

/// Errors raised while loading, rendering, or locating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A config file exists but could not be read.
    #[error("cannot read {path}: {source}")]
    ReadFile {
        /// File that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// A config file is not valid TOML or has fields of the wrong type.
    #[error("invalid config file {path}: {source}")]
    ParseToml {
        /// File that failed to parse.
        path: PathBuf,
        /// Parser diagnostic, including line and column.
        source: de::Error,
    },

    /// Effective settings could not be rendered.
    #[error("cannot render settings as TOML: {0}")]
    Serialize(#[from] ser::Error),

    /// No home directory, so `~/.seokit.toml` has no location.
    #[error("could not determine home directory")]
    NoHomeDirectory,
}

impl ConfigError {
    /// Returns the config file the error refers to, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::ReadFile { path, .. } | Self::ParseToml { path, .. } => Some(path),
            Self::Serialize(_) | Self::NoHomeDirectory => None,
        }
    }
}
