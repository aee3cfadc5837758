//! Centralized path definitions for tsc-lint
//!
//! This module provides a single source of truth for the file and directory
//! names tsc-lint looks for, plus the small path helpers shared by the
//! adapters.
//!
//! ## Layout
//!
//! ```text
//! repo/
//! ├── .gitignore                     # Ignore rules (also read from ancestors)
//! ├── .tsc-lint.toml                 # Optional settings
//! ├── node_modules/
//! │   ├── .bin/tsc                   # Global checker binary
//! │   └── .tsc-lint/                 # Scratch output directory
//! ├── tsconfig.json                  # Root project
//! └── packages/
//!     └── app/
//!         ├── node_modules/.bin/tsc  # Optional pinned checker
//!         └── tsconfig.json          # Nested project
//! ```

use std::fs;
use std::path::{Component, Path, PathBuf};

// =============================================================================
// Well-known names
// =============================================================================

/// Project configuration filename
pub const TSCONFIG_JSON: &str = "tsconfig.json";

/// Ignore rule filename
pub const GITIGNORE: &str = ".gitignore";

/// Dependency install directory
pub const NODE_MODULES: &str = "node_modules";

/// Version control metadata directory (never walked)
pub const GIT_DIR: &str = ".git";

/// Checker executable, relative to `node_modules`
pub const TSC_BIN: &str = ".bin/tsc";

/// Scratch output directory name, created inside `node_modules`
pub const OUTPUT_DIR: &str = ".tsc-lint";

/// Optional settings file, read from the working directory
pub const SETTINGS_TOML: &str = ".tsc-lint.toml";

// =============================================================================
// Helpers
// =============================================================================

/// Walk from `start` up to the filesystem root.
///
/// `visit` receives each directory and the names of its entries. Returning
/// `true` stops the walk. Directories that cannot be listed are visited with
/// an empty listing.
pub fn find_up(start: &Path, mut visit: impl FnMut(&Path, &[String]) -> bool) {
    for dir in start.ancestors() {
        let entries = list_dir(dir);
        if visit(dir, &entries) {
            return;
        }
    }
}

fn list_dir(dir: &Path) -> Vec<String> {
    match fs::read_dir(dir) {
        Ok(read_dir) => read_dir
            .filter_map(Result::ok)
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .collect(),
        Err(err) => {
            log::debug!("Cannot list {}: {err}", dir.display());
            Vec::new()
        },
    }
}

/// True if `path` exists and is a regular file (symlinks are followed).
#[must_use]
pub fn file_exists(path: &Path) -> bool {
    fs::metadata(path).is_ok_and(|meta| meta.is_file())
}

/// Lexically normalize a path: drop `.` components and fold `..` into
/// their parent. Does not touch the filesystem.
#[must_use]
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {},
            Component::ParentDir => {
                if !out.pop() {
                    out.push(Component::ParentDir);
                }
            },
            other => out.push(other),
        }
    }
    out
}

/// Resolve `path` against `base` (if relative) and normalize the result.
#[must_use]
pub fn absolutize(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        normalize(path)
    } else {
        normalize(&base.join(path))
    }
}

/// Render `path` relative to `cwd` with a leading `./`, as shown in reports.
///
/// Paths outside `cwd` are shown as they are.
#[must_use]
pub fn display_relative(path: &Path, cwd: &Path) -> String {
    path.strip_prefix(cwd).map_or_else(
        |_| path.display().to_string(),
        |rel| format!("./{}", to_slash(rel)),
    )
}

/// Render a path with forward slashes regardless of platform.
#[must_use]
pub fn to_slash(path: &Path) -> String {
    let text = path.to_string_lossy();
    if std::path::MAIN_SEPARATOR == '\\' {
        text.replace('\\', "/")
    } else {
        text.into_owned()
    }
}

/// Directories that are never walked: dependency installs and VCS metadata
#[must_use]
pub fn is_never_walked(name: &str) -> bool {
    name == NODE_MODULES || name == GIT_DIR
}
