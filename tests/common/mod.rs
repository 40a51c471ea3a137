#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the regexp-guard binary.
#[macro_export]
macro_rules! regexp_guard {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("regexp-guard"))
    };
}

/// The Java source used by the checkstyle compatibility scenarios.
pub const INPUT_SEMANTIC: &str = include_str!("../fixtures/InputSemantic.java");

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Creates a `.regexp-guard.toml` in the temp directory.
    pub fn create_config(&self, content: &str) {
        self.create_file(".regexp-guard.toml", content);
    }

    /// Copies the Java compatibility fixture to `relative_path`.
    pub fn create_semantic_input(&self, relative_path: &str) {
        self.create_file(relative_path, INPUT_SEMANTIC);
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
