//! Scratch directory trees for unit tests.

use std::{
    fs,
    path::{Path, PathBuf},
};

use tempfile::TempDir;

use crate::discovery::CONFIG_FILENAME;

/// A temporary directory tree that is removed on drop.
pub struct Workspace {
    /// Backing temporary directory.
    tmp: TempDir,
}

impl Workspace {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self {
            tmp: tempfile::tempdir().unwrap(),
        }
    }

    /// Returns the tree's root directory.
    pub fn path(&self) -> &Path {
        self.tmp.path()
    }

    /// Creates `rel` and its parents, returning the absolute path.
    pub fn dir(&self, rel: &str) -> PathBuf {
        let dir = self.path().join(rel);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    /// Writes `.seokit.toml` into `rel`, which may be empty for the root.
    pub fn config(&self, rel: &str, body: &str) -> PathBuf {
        let file = self.dir(rel).join(CONFIG_FILENAME);
        fs::write(&file, body).unwrap();
        file
    }
}
