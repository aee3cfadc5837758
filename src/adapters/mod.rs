//! Adapter implementations
//!
//! This module contains everything that touches the filesystem or spawns
//! processes:
//!
//! - [`gitignore`] - Layered `.gitignore` resolution
//! - [`locator`] - Finding the `tsc` binary
//! - [`discovery`] - Finding `tsconfig.json` files
//! - [`tsconfig`] - Parsing configurations and resolving their files
//! - [`process`] - Running `tsc` (implements `CheckerRunner`)

pub mod discovery;
pub mod gitignore;
pub mod locator;
pub mod process;
pub mod tsconfig;

pub use discovery::{DiscoveryError, discover_configs};
pub use gitignore::{IgnoreError, IgnoreResolver};
pub use locator::BinaryLocator;
pub use process::TscRunner;
pub use tsconfig::{ConfigError, TsConfig, load_tsconfig, resolve_project};
