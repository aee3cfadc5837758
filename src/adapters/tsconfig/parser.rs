//! Configuration loading
//!
//! Reads a configuration and the chain of configurations it `extends`.
//! `files`, `include` and `exclude` are inherited whole and stay relative
//! to the configuration that declared them; `compilerOptions` are merged
//! key by key, with the extending file winning.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_json::{Map, Value};

use super::ConfigError;
use super::jsonc::strip_jsonc;
use crate::paths::{self, NODE_MODULES, TSCONFIG_JSON};

/// On-disk shape of a configuration (only the fields tsc-lint reads)
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawTsConfig {
    extends: Option<Extends>,
    files: Option<Vec<String>>,
    include: Option<Vec<String>>,
    exclude: Option<Vec<String>>,
    compiler_options: Option<Map<String, Value>>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Extends {
    One(String),
    Many(Vec<String>),
}

impl Extends {
    fn into_vec(self) -> Vec<String> {
        match self {
            Self::One(spec) => vec![spec],
            Self::Many(specs) => specs,
        }
    }
}

/// A list of paths or patterns and the directory they are relative to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileList {
    /// Directory of the configuration that declared the list
    pub base: PathBuf,
    /// Entries as written
    pub entries: Vec<String>,
}

/// A configuration with its `extends` chain applied
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TsConfig {
    /// Path of the configuration file
    pub path: PathBuf,
    /// Explicit `files`
    pub files: Option<FileList>,
    /// `include` patterns
    pub include: Option<FileList>,
    /// `exclude` patterns
    pub exclude: Option<FileList>,
    /// Merged `compilerOptions`
    pub compiler_options: Map<String, Value>,
}

impl TsConfig {
    /// Whether `compilerOptions.noEmit` is set
    #[must_use]
    pub fn no_emit(&self) -> bool {
        self.compiler_options.get("noEmit").and_then(Value::as_bool).unwrap_or(false)
    }

    fn inherit(&mut self, base: Self) {
        if base.files.is_some() {
            self.files = base.files;
        }
        if base.include.is_some() {
            self.include = base.include;
        }
        if base.exclude.is_some() {
            self.exclude = base.exclude;
        }
        self.compiler_options.extend(base.compiler_options);
    }

    fn apply(&mut self, raw: RawTsConfig, dir: &Path) {
        let list = |entries| FileList {
            base: dir.to_path_buf(),
            entries,
        };
        if let Some(files) = raw.files {
            self.files = Some(list(files));
        }
        if let Some(include) = raw.include {
            self.include = Some(list(include));
        }
        if let Some(exclude) = raw.exclude {
            self.exclude = Some(list(exclude));
        }
        if let Some(options) = raw.compiler_options {
            self.compiler_options.extend(options);
        }
    }
}

/// Load a configuration, following its `extends` chain.
pub fn load_tsconfig(path: &Path) -> Result<TsConfig, ConfigError> {
    load_chain(path, &mut Vec::new())
}

fn load_chain(path: &Path, chain: &mut Vec<PathBuf>) -> Result<TsConfig, ConfigError> {
    if chain.iter().any(|seen| seen == path) {
        return Err(ConfigError::Circular(path.to_path_buf()));
    }
    chain.push(path.to_path_buf());

    let mut raw = read_raw(path)?;
    let dir = path.parent().unwrap_or_else(|| Path::new("."));

    let mut config = TsConfig {
        path: path.to_path_buf(),
        ..TsConfig::default()
    };

    for spec in raw.extends.take().map_or_else(Vec::new, Extends::into_vec) {
        let base_path = resolve_extends(&spec, dir).ok_or_else(|| ConfigError::ExtendsNotFound {
            spec: spec.clone(),
            from: path.to_path_buf(),
        })?;
        log::debug!("{} extends {}", path.display(), base_path.display());
        config.inherit(load_chain(&base_path, chain)?);
    }
    config.apply(raw, dir);

    chain.pop();
    Ok(config)
}

fn read_raw(path: &Path) -> Result<RawTsConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&strip_jsonc(&content)).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Resolve an `extends` specifier relative to the extending file's directory.
///
/// Relative and absolute specifiers name a file directly (`.json` may be
/// omitted). Anything else is looked up as a package in the nearest
/// `node_modules`.
fn resolve_extends(spec: &str, dir: &Path) -> Option<PathBuf> {
    let spec_path = Path::new(spec);
    if spec.starts_with('.') || spec_path.is_absolute() {
        let candidate = paths::absolutize(dir, spec_path);
        return with_json_fallback(&candidate);
    }

    let mut found = None;
    paths::find_up(dir, |ancestor, entries| {
        if !entries.iter().any(|name| name == NODE_MODULES) {
            return false;
        }
        let package = ancestor.join(NODE_MODULES).join(spec_path);
        found = with_json_fallback(&package).or_else(|| {
            let nested = package.join(TSCONFIG_JSON);
            paths::file_exists(&nested).then_some(nested)
        });
        found.is_some()
    });
    found
}

fn with_json_fallback(candidate: &Path) -> Option<PathBuf> {
    if paths::file_exists(candidate) {
        return Some(candidate.to_path_buf());
    }
    let mut with_ext = candidate.as_os_str().to_owned();
    with_ext.push(".json");
    let with_ext = PathBuf::from(with_ext);
    paths::file_exists(&with_ext).then_some(with_ext)
}
