//! Core services
//!
//! Orchestration logic that operates on domain models. Everything here
//! except the scheduler is pure: data in, results out.
//!
//! - [`rules`] - Rewrite ignore patterns for the scope they are merged into
//! - [`ownership`] - Give every source file exactly one owning project
//! - [`diagnostics`] - Extract and attribute diagnostics from checker output
//! - [`scheduler`] - Run the checker for every project under a concurrency cap

pub mod diagnostics;
pub mod ownership;
pub mod rules;
pub mod scheduler;

pub use diagnostics::{interpret, owned_diagnostics, parse_diagnostics};
pub use ownership::{OwnershipMap, deduplicate};
pub use rules::{rewrite_ancestor_line, rewrite_nested_line};
pub use scheduler::{TaskFailure, TaskOutcome, run_projects};
