//! Project configuration model
//!
//! A project is one discovered `tsconfig.json` together with the absolute
//! paths of the source files it is responsible for.

use std::path::{Path, PathBuf};

use serde::Serialize;

/// One resolved project configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectConfig {
    /// Absolute path of the configuration file
    pub path: PathBuf,

    /// Directory containing the configuration file
    pub dir: PathBuf,

    /// Absolute member files, sorted and free of duplicates
    files: Vec<PathBuf>,

    /// `compilerOptions.noEmit` - the checker produces no output artifacts
    pub no_emit: bool,
}

impl ProjectConfig {
    /// Create a project; `files` is sorted and deduplicated
    #[must_use]
    pub fn new(path: PathBuf, mut files: Vec<PathBuf>, no_emit: bool) -> Self {
        let dir = path.parent().map(Path::to_path_buf).unwrap_or_default();
        files.sort();
        files.dedup();
        Self {
            path,
            dir,
            files,
            no_emit,
        }
    }

    /// Member files in sorted order
    #[must_use]
    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    /// Whether the project has no member files
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Keep only the member files accepted by `keep`
    pub fn retain_files(&mut self, keep: impl FnMut(&PathBuf) -> bool) {
        self.files.retain(keep);
    }
}
