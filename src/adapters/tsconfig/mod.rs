//! `tsconfig.json` handling
//!
//! - [`jsonc`] - Comment and trailing-comma tolerant JSON preprocessing
//! - [`parser`] - Loading a configuration and its `extends` chain
//! - [`files`] - Resolving the files a configuration covers

mod files;
mod jsonc;
mod parser;

use std::path::PathBuf;

use thiserror::Error;

pub use files::{DEFAULT_EXCLUDE, DEFAULT_INCLUDE, resolve_project};
pub use jsonc::strip_jsonc;
pub use parser::{FileList, TsConfig, load_tsconfig};

/// Errors that can occur while reading a configuration
///
/// All of them are fatal for the run: a configuration that cannot be read
/// cannot be given ownership of any files.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read
    #[error("failed to read {}: {source}", path.display())]
    Read {
        /// Configuration path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid JSON (after comments are stripped)
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        /// Configuration path
        path: PathBuf,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// An `extends` entry points nowhere
    #[error("cannot find {spec:?} extended by {}", from.display())]
    ExtendsNotFound {
        /// The `extends` value
        spec: String,
        /// Configuration declaring it
        from: PathBuf,
    },

    /// The `extends` chain loops back on itself
    #[error("circular extends through {}", .0.display())]
    Circular(PathBuf),

    /// An `include` or `exclude` entry is not a valid glob
    #[error("invalid pattern {pattern:?} in {}: {source}", path.display())]
    Pattern {
        /// The offending pattern
        pattern: String,
        /// Configuration path
        path: PathBuf,
        /// Underlying glob error
        #[source]
        source: glob::PatternError,
    },
}
