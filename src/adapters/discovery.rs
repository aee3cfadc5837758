//! Configuration discovery
//!
//! Finds every `tsconfig.json` below the search roots that is not excluded
//! by the ignore rules.

use std::path::{Path, PathBuf};

use thiserror::Error;
use walkdir::WalkDir;

use crate::adapters::gitignore::IgnoreResolver;
use crate::paths::{self, TSCONFIG_JSON};

/// Errors that can occur during discovery
#[derive(Debug, Error)]
pub enum DiscoveryError {
    /// Root path does not exist
    #[error("root path does not exist: {}", .0.display())]
    RootNotFound(PathBuf),

    /// Root path is not a directory
    #[error("not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
}

/// Find configuration files under each root.
///
/// Relative roots are resolved against `cwd`. Roots are searched
/// independently and their results concatenated, so overlapping roots can
/// yield the same configuration twice.
pub fn discover_configs(
    roots: &[PathBuf],
    cwd: &Path,
    ignore: &IgnoreResolver,
) -> Result<Vec<PathBuf>, DiscoveryError> {
    let mut configs = Vec::new();
    for root in roots {
        let root = paths::absolutize(cwd, root);
        configs.extend(discover_in(&root, ignore)?);
    }
    Ok(configs)
}

fn discover_in(root: &Path, ignore: &IgnoreResolver) -> Result<Vec<PathBuf>, DiscoveryError> {
    if !root.exists() {
        return Err(DiscoveryError::RootNotFound(root.to_path_buf()));
    }
    if !root.is_dir() {
        return Err(DiscoveryError::NotADirectory(root.to_path_buf()));
    }

    let walker = WalkDir::new(root).follow_links(true).into_iter().filter_entry(|entry| {
        if entry.depth() == 0 || !entry.file_type().is_dir() {
            return true;
        }
        !paths::is_never_walked(&entry.file_name().to_string_lossy())
            && !ignore.is_dir_ignored(entry.path())
    });

    let mut found = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                log::warn!("Skipping unreadable entry under {}: {err}", root.display());
                continue;
            },
        };
        if !entry.file_type().is_file() || entry.file_name() != TSCONFIG_JSON {
            continue;
        }

        let path = paths::normalize(entry.path());
        if ignore.is_ignored(&path) {
            log::debug!("Skipped by .gitignore file: {}", path.display());
            continue;
        }
        found.push(path);
    }

    found.sort();
    Ok(found)
}
