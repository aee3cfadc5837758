//! Core domain logic for tsc-lint
//!
//! This module contains the project-resolution and work-distribution logic
//! that does not touch the filesystem directly. External interactions (the
//! checker process) are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (`ProjectConfig`, `Diagnostic`, `TaskResult`, ignore rules)
//! - `services/` - Rule rewriting, ownership, diagnostics, scheduling
//! - `ports/` - Trait definitions for external dependencies

pub mod models;
pub mod ports;
pub mod services;
