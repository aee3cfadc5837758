//! Settings file
//!
//! An optional `.tsc-lint.toml` in the working directory supplies defaults
//! for values that can also be given on the command line:
//!
//! ```toml
//! roots = ["packages"]
//! ignore = ["fixtures"]
//! jobs = 4
//! ```

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::paths::SETTINGS_TOML;

/// Settings read from `.tsc-lint.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Roots to search when none are given on the command line
    pub roots: Vec<PathBuf>,
    /// Extra ignore patterns, applied before command-line ones
    pub ignore: Vec<String>,
    /// Concurrency cap
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jobs: Option<usize>,
}

impl Settings {
    /// Path of the settings file for `cwd`
    #[must_use]
    pub fn path(cwd: &Path) -> PathBuf {
        cwd.join(SETTINGS_TOML)
    }

    /// Load settings for `cwd`.
    ///
    /// A missing file yields the defaults; a file that exists but cannot be
    /// read or parsed is an error.
    pub fn load(cwd: &Path) -> anyhow::Result<Self> {
        let path = Self::path(cwd);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Self::default()),
            Err(err) => {
                return Err(err).with_context(|| format!("failed to read {}", path.display()));
            },
        };
        let settings: Self = toml::from_str(&content)
            .with_context(|| format!("failed to parse {}", path.display()))?;
        log::debug!("Loaded settings from {}", path.display());
        Ok(settings)
    }
}
