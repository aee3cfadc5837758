//! Domain models for tsc-lint
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`IgnoreRuleSet`] - Ordered gitignore-style rules from every scope
//! - [`ProjectConfig`] - One `tsconfig.json` and the files it checks
//! - [`Diagnostic`] - One problem reported by the checker
//! - [`TaskResult`] - What one checker run produced

mod diagnostic;
mod ignore_rule;
mod project;
mod task;

pub use diagnostic::Diagnostic;
pub use ignore_rule::{IgnoreRule, IgnoreRuleSet, is_blank_or_comment};
pub use project::ProjectConfig;
pub use task::TaskResult;
