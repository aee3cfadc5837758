//! Checker binary lookup
//!
//! The checker is installed per package, so the binary to use is the one in
//! the nearest ancestor `node_modules`. A sub-project that pins its own
//! checker version gets its own binary this way.

use std::path::{Path, PathBuf};

use crate::paths::{self, NODE_MODULES, TSC_BIN};

/// Finds an executable installed under `node_modules`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryLocator {
    /// Executable path relative to a `node_modules` directory
    relative: PathBuf,
}

impl BinaryLocator {
    /// Create a locator for an executable at `relative` inside `node_modules`
    #[must_use]
    pub fn new(relative: impl Into<PathBuf>) -> Self {
        Self {
            relative: relative.into(),
        }
    }

    /// Locator for `node_modules/.bin/tsc`
    #[must_use]
    pub fn tsc() -> Self {
        Self::new(TSC_BIN)
    }

    /// Walk up from `start` and return the first installed executable.
    #[must_use]
    pub fn locate(&self, start: &Path) -> Option<PathBuf> {
        let mut found = None;
        paths::find_up(start, |dir, entries| {
            if !entries.iter().any(|name| name == NODE_MODULES) {
                return false;
            }
            let candidate = dir.join(NODE_MODULES).join(&self.relative);
            if paths::file_exists(&candidate) {
                log::debug!("Found checker binary at {}", candidate.display());
                found = Some(candidate);
                return true;
            }
            false
        });
        found
    }
}

impl Default for BinaryLocator {
    fn default() -> Self {
        Self::tsc()
    }
}
