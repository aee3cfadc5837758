//! Checker runner port
//!
//! Defines the interface for running the external type-checker against one
//! project configuration.

use std::path::PathBuf;

use async_trait::async_trait;
use thiserror::Error;

use crate::core::models::ProjectConfig;

/// Raw result of one checker process
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutput {
    /// Exit code (`None` if terminated by a signal)
    pub exit_code: Option<i32>,
    /// Captured standard output
    pub stdout: String,
}

impl RunOutput {
    /// Whether the process exited with status 0
    #[must_use]
    pub const fn success(&self) -> bool {
        matches!(self.exit_code, Some(0))
    }
}

/// Errors that fail a single task without affecting its siblings
#[derive(Debug, Error)]
pub enum TaskError {
    /// The checker process could not be started
    #[error("failed to launch {}: {source}", binary.display())]
    Launch {
        /// Binary that was being launched
        binary: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The checker failed without printing anything that looks like a diagnostic
    #[error("checker exited with {} and reported no diagnostics", describe_exit(*exit_code))]
    Unrecognized {
        /// Exit code of the process
        exit_code: Option<i32>,
        /// Captured standard output
        output: String,
    },

    /// The task running the checker panicked
    #[error("task aborted: {0}")]
    Aborted(String),
}

fn describe_exit(code: Option<i32>) -> String {
    code.map_or_else(|| "a signal".to_string(), |code| format!("code {code}"))
}

/// Runs the external checker for one project
///
/// Implementations resolve the binary to use, launch it, and wait for it
/// to exit. Standard error is expected to pass straight through to the
/// user.
#[async_trait]
pub trait CheckerRunner: Send + Sync {
    /// Run the checker against `project` and capture its output
    async fn run(&self, project: &ProjectConfig) -> Result<RunOutput, TaskError>;
}
