//! Shared test fixtures and helpers
//!
//! This module provides common utilities for testing tsc-lint components.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A throwaway source tree
pub struct TestTree {
    dir: TempDir,
}

impl TestTree {
    /// Create an empty tree
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("failed to create temp dir"),
        }
    }

    /// Create a two-project tree:
    /// ```text
    /// /
    /// ├── tsconfig.json          { "include": ["src/**/*"] }
    /// └── src/
    ///     ├── main.ts
    ///     └── lib/
    ///         ├── tsconfig.json  { "include": ["**/*"] }
    ///         └── a.ts
    /// ```
    pub fn nested() -> Self {
        let tree = Self::new();
        tree.add_file("tsconfig.json", r#"{ "include": ["src/**/*"] }"#);
        tree.add_file("src/main.ts", "export {}\n");
        tree.add_file("src/lib/tsconfig.json", r#"{ "include": ["**/*"] }"#);
        tree.add_file("src/lib/a.ts", "export const a = 1\n");
        tree
    }

    /// Root of the tree
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Absolute path of `rel` inside the tree
    pub fn join(&self, rel: &str) -> PathBuf {
        self.dir.path().join(rel)
    }

    /// Add a file, creating parent directories
    pub fn add_file(&self, rel: &str, content: &str) -> PathBuf {
        let full_path = self.join(rel);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&full_path, content).unwrap();
        full_path
    }

    /// Add an empty directory
    pub fn add_dir(&self, rel: &str) -> PathBuf {
        let full_path = self.join(rel);
        fs::create_dir_all(&full_path).unwrap();
        full_path
    }
}

impl Default for TestTree {
    fn default() -> Self {
        Self::new()
    }
}
