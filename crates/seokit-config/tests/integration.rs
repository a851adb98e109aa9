//! Integration tests for seokit-config.
//!
//! Tests the full configuration loading pipeline: discovery -> parse -> merge.

// Integration tests live outside cfg(test) by design
#![allow(clippy::tests_outside_test_module)]

use std::{
    fs,
    path::{Path, PathBuf},
};

use seokit_config::{Config, ConfigError, ConfigWarning};

/// Test helper to create a temporary directory structure for tests.
struct TestEnv {
    root: tempfile::TempDir,
}

impl TestEnv {
    fn new() -> Self {
        Self {
            root: tempfile::tempdir().unwrap(),
        }
    }

    fn path(&self) -> &Path {
        self.root.path()
    }

    /// Creates a directory and returns its path.
    fn create_dir(&self, rel_path: &str) -> PathBuf {
        let path = self.root.path().join(rel_path);
        fs::create_dir_all(&path).unwrap();
        path
    }

    /// Creates a file with content and returns its path.
    fn create_file(&self, rel_path: &str, content: &str) -> PathBuf {
        let path = self.root.path().join(rel_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }
}

#[test]
fn test_load_root_config_only() {
    let env = TestEnv::new();
    env.create_file(
        ".seokit.toml",
        r#"
root = true

[keywords]
method = "textrank"
top_k = 10

[analysis]
target_keywords = ["写作技巧"]
"#,
    );

    let config = Config::load(env.path()).unwrap();
    assert_eq!(config.keywords.method, "textrank");
    assert_eq!(config.keywords.top_k, 10);
    assert_eq!(config.keywords.damping, 0.85);
    assert_eq!(config.analysis.target_keywords, vec!["写作技巧".to_string()]);
    assert_eq!(config.config_root.as_deref(), Some(env.path()));
    assert!(config.validate().is_empty());
}

#[test]
fn test_load_nested_configs_closest_wins() {
    let env = TestEnv::new();
    env.create_file(
        ".seokit.toml",
        "root = true\n[keywords]\ntop_k = 20\niterations = 30\n",
    );
    env.create_file("drafts/.seokit.toml", "[keywords]\ntop_k = 5\n");
    let working = env.create_dir("drafts/week1");

    let config = Config::load(&working).unwrap();
    assert_eq!(config.keywords.top_k, 5);
    assert_eq!(config.keywords.iterations, 30);
    assert_eq!(config.config_root, Some(env.path().join("drafts")));
}

#[test]
fn test_load_from_files_in_given_order() {
    let env = TestEnv::new();
    let high = env.create_file("a/.seokit.toml", "[content]\nextractor = \"frequency\"\n");
    let low = env.create_file(
        "b/.seokit.toml",
        "[content]\nextractor = \"analyzer\"\n[keywords]\nwindow_size = 3\n",
    );

    let config = Config::load_from_files(&[high, low]).unwrap();
    assert_eq!(config.content.extractor, "frequency");
    assert_eq!(config.keywords.window_size, 3);
}

#[test]
fn test_load_invalid_config_reports_path() {
    let env = TestEnv::new();
    let path = env.create_file(".seokit.toml", "root = true\n[keywords\n");

    let err = Config::load(env.path()).unwrap_err();
    match err {
        ConfigError::ParseToml { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_load_reports_validation_warnings() {
    let env = TestEnv::new();
    env.create_file(
        ".seokit.toml",
        "root = true\n[keywords]\ndamping = 1.2\ntop_k = 0\n",
    );

    let config = Config::load(env.path()).unwrap();
    let warnings = config.validate();
    assert!(warnings.contains(&ConfigWarning::DampingOutOfRange { value: 1.2 }));
    assert!(warnings.contains(&ConfigWarning::ZeroTopK));
}

#[test]
fn test_effective_settings_render_merged_values() {
    let env = TestEnv::new();
    env.create_file(".seokit.toml", "root = true\n[keywords]\nmethod = \"tfidf\"\n");

    let config = Config::load(env.path()).unwrap();
    let rendered = config.settings_to_toml().unwrap();
    assert!(rendered.contains("method = \"tfidf\""));
    assert!(rendered.contains("extractor = \"analyzer\""));
}
