//! File-set resolution
//!
//! Turns a configuration into the concrete list of files it covers, using
//! either its explicit `files` list or its `include`/`exclude` patterns.
//! Pattern matching walks from the literal prefix of each `include` entry
//! and never descends into `node_modules` or `.git` below it.

use std::path::{Path, PathBuf};

use glob::{MatchOptions, Pattern};
use walkdir::WalkDir;

use super::ConfigError;
use super::parser::{FileList, load_tsconfig};
use crate::core::models::ProjectConfig;
use crate::paths::{self, TSCONFIG_JSON};

/// `include` used when a configuration declares none
pub const DEFAULT_INCLUDE: &[&str] = &["**/*"];

/// `exclude` used when a configuration declares none
pub const DEFAULT_EXCLUDE: &[&str] =
    &["**/node_modules", "**/bower_components", "**/jspm_packages"];

/// Wildcards never match a leading dot; a pattern has to spell it out.
const INCLUDE_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: true,
};

const EXCLUDE_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// Parse `path` and compute the project it describes.
///
/// Returns `Ok(None)` when the configuration covers no files, which is not
/// an error. Read and parse failures are.
pub fn resolve_project(path: &Path) -> Result<Option<ProjectConfig>, ConfigError> {
    let config = load_tsconfig(path)?;
    let dir = path.parent().unwrap_or_else(|| Path::new("."));

    let files = match (&config.files, &config.include) {
        (Some(files), _) => explicit_files(files),
        (None, Some(include)) if include.entries.is_empty() => {
            log::debug!("Skipping {}: empty include list", path.display());
            return Ok(None);
        },
        (None, include) => {
            let include = include.clone().unwrap_or_else(|| defaults(DEFAULT_INCLUDE, dir));
            let exclude =
                config.exclude.clone().unwrap_or_else(|| defaults(DEFAULT_EXCLUDE, dir));
            matched_files(
                &PatternSet::compile(&include, path)?,
                &PatternSet::compile(&exclude, path)?,
            )
        },
    };

    if files.is_empty() {
        log::debug!("Skipping {}: no files found", path.display());
        return Ok(None);
    }

    log::debug!("{} covers {} file(s)", path.display(), files.len());
    Ok(Some(ProjectConfig::new(path.to_path_buf(), files, config.no_emit())))
}

fn defaults(entries: &[&str], dir: &Path) -> FileList {
    FileList {
        base: dir.to_path_buf(),
        entries: entries.iter().map(ToString::to_string).collect(),
    }
}

fn is_config_file(path: &Path) -> bool {
    path.file_name().is_some_and(|name| name == TSCONFIG_JSON)
}

fn explicit_files(list: &FileList) -> Vec<PathBuf> {
    list.entries
        .iter()
        .map(|entry| paths::absolutize(&list.base, Path::new(entry)))
        .filter(|file| paths::file_exists(file) && !is_config_file(file))
        .collect()
}

/// Compiled `include` or `exclude` patterns
///
/// Each entry is anchored at the directory of the configuration that
/// declared it, and also matches everything below the directory it names,
/// so `src` behaves like `src/**/*`.
struct PatternSet {
    patterns: Vec<Pattern>,
    /// Longest wildcard-free prefix of each entry; walking these covers
    /// every path the set can match
    bases: Vec<PathBuf>,
}

impl PatternSet {
    fn compile(list: &FileList, config: &Path) -> Result<Self, ConfigError> {
        let mut patterns = Vec::with_capacity(list.entries.len() * 2);
        let mut bases = Vec::with_capacity(list.entries.len());
        for entry in &list.entries {
            let (literal, wildcard) = split_entry(&list.base, entry);
            // Directory names are matched as written, brackets and all.
            let mut anchored = Pattern::escape(&paths::to_slash(&literal));
            if !wildcard.is_empty() {
                anchored = format!("{}/{wildcard}", anchored.trim_end_matches('/'));
            }
            let recursive = format!("{}/**/*", anchored.trim_end_matches('/'));
            bases.push(literal);

            for text in [anchored, recursive] {
                let pattern = Pattern::new(&text).map_err(|source| ConfigError::Pattern {
                    pattern: entry.clone(),
                    path: config.to_path_buf(),
                    source,
                })?;
                patterns.push(pattern);
            }
        }
        bases.sort();
        bases.dedup();
        Ok(Self { patterns, bases })
    }

    fn matches(&self, path: &Path, options: MatchOptions) -> bool {
        let text = paths::to_slash(path);
        self.patterns.iter().any(|pattern| pattern.matches_with(&text, options))
    }
}

/// Split `entry` into the absolute directory its wildcard-free leading
/// components name, and the remaining glob text.
fn split_entry(base: &Path, entry: &str) -> (PathBuf, String) {
    let mut literal = PathBuf::new();
    let mut wildcard = Vec::new();
    for component in Path::new(entry).components() {
        let text = component.as_os_str().to_string_lossy();
        if wildcard.is_empty() && !text.contains(['*', '?', '[']) {
            literal.push(component);
        } else {
            wildcard.push(text.into_owned());
        }
    }
    (paths::absolutize(base, &literal), wildcard.join("/"))
}

fn matched_files(include: &PatternSet, exclude: &PatternSet) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for base in &include.bases {
        let walker = WalkDir::new(base).follow_links(true).into_iter().filter_entry(|entry| {
            if entry.depth() == 0 || !entry.file_type().is_dir() {
                return true;
            }
            !paths::is_never_walked(&entry.file_name().to_string_lossy())
                && !exclude.matches(entry.path(), EXCLUDE_OPTIONS)
        });

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    log::debug!("Skipping unreadable entry under {}: {err}", base.display());
                    continue;
                },
            };
            if !entry.file_type().is_file() {
                continue;
            }
            let path = paths::normalize(entry.path());
            if is_config_file(&path)
                || !include.matches(&path, INCLUDE_OPTIONS)
                || exclude.matches(&path, EXCLUDE_OPTIONS)
            {
                continue;
            }
            files.push(path);
        }
    }
    files
}
