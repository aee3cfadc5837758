//! Task result model
//!
//! The outcome of one checker run that produced interpretable output.

use serde::Serialize;

use super::{Diagnostic, ProjectConfig};

/// Result of checking one project
#[derive(Debug, Clone, Serialize)]
pub struct TaskResult {
    /// The project that was checked
    pub project: ProjectConfig,
    /// Captured standard output of the checker
    pub output: String,
    /// Exit code (`None` if the process was killed by a signal)
    pub exit_code: Option<i32>,
    /// Diagnostics for files this project owns
    pub diagnostics: Vec<Diagnostic>,
}

impl TaskResult {
    /// Whether the project checked clean
    #[must_use]
    pub fn passed(&self) -> bool {
        self.diagnostics.is_empty()
    }
}
