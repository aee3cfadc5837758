//! Output formatting for human and JSON modes
//!
//! Every finished project produces one [`ProjectReport`], rendered either as
//! a human-readable block or as a single JSON line. A run ends with one
//! [`RunSummary`].

use std::io::Write;
use std::path::Path;

use colored::Colorize;
use serde::Serialize;

use crate::core::models::{Diagnostic, TaskResult};
use crate::paths;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// One diagnostic as shown to the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiagnosticEntry {
    /// File, relative to the working directory when inside it
    pub file: String,
    /// Line number (1-indexed)
    pub line: u32,
    /// Column number (1-indexed)
    pub column: u32,
    /// Diagnostic code, e.g. `TS2322`
    pub code: String,
    /// Message text
    pub message: String,
}

impl DiagnosticEntry {
    fn from_diagnostic(diagnostic: &Diagnostic, cwd: &Path) -> Self {
        Self {
            file: paths::display_relative(&diagnostic.file, cwd),
            line: diagnostic.line,
            column: diagnostic.column,
            code: diagnostic.code.clone(),
            message: diagnostic.message.clone(),
        }
    }
}

/// Report for one checked project
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectReport {
    /// Configuration path, relative to the working directory
    pub config: String,
    /// Whether the project checked clean
    pub passed: bool,
    /// Number of owned diagnostics
    pub error_count: usize,
    /// The owned diagnostics
    pub diagnostics: Vec<DiagnosticEntry>,
}

impl ProjectReport {
    /// Build the report for a finished task
    #[must_use]
    pub fn from_result(result: &TaskResult, cwd: &Path) -> Self {
        let diagnostics: Vec<_> = result
            .diagnostics
            .iter()
            .map(|d| DiagnosticEntry::from_diagnostic(d, cwd))
            .collect();
        Self {
            config: paths::display_relative(&result.project.path, cwd),
            passed: diagnostics.is_empty(),
            error_count: diagnostics.len(),
            diagnostics,
        }
    }

    /// Render the report as text, including the trailing newline
    #[must_use]
    pub fn render(&self, mode: OutputMode) -> String {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => format!("{}\n", serde_json::to_string(self).unwrap_or_default()),
        }
    }

    fn render_human(&self) -> String {
        let count = format!("{} error(s)", self.error_count);
        let mut out = if self.passed {
            format!("{} {} {}\n", "\u{2713}".green().bold(), self.config, count.green())
        } else {
            format!("{} {} {}\n", "\u{2717}".red().bold(), self.config, count.red())
        };
        for d in &self.diagnostics {
            out.push_str(&format!(
                "  {}:{}:{} - {} {}: {}\n",
                d.file,
                d.line,
                d.column,
                "error".red(),
                d.code.dimmed(),
                d.message
            ));
        }
        out
    }

    /// Write the report to stdout in one locked write, so reports from
    /// different projects never interleave.
    pub fn emit(&self, mode: OutputMode) {
        write_block(&self.render(mode));
    }
}

/// Totals for a whole run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    /// Whether every project passed and no task failed
    pub passed: bool,
    /// Number of projects checked
    pub projects: usize,
    /// Total owned diagnostics
    pub errors: usize,
    /// Tasks that failed to produce a result
    pub failed_tasks: usize,
}

impl RunSummary {
    /// Render the summary as text, including the trailing newline
    #[must_use]
    pub fn render(&self, mode: OutputMode) -> String {
        match mode {
            OutputMode::Human => {
                let line = format!(
                    "{} project(s), {} error(s), {} failed task(s)",
                    self.projects, self.errors, self.failed_tasks
                );
                if self.passed {
                    format!("\n{}\n", line.green().bold())
                } else {
                    format!("\n{}\n", line.red().bold())
                }
            },
            OutputMode::Json => {
                let value = serde_json::json!({ "summary": self });
                format!("{value}\n")
            },
        }
    }

    /// Write the summary to stdout
    pub fn emit(&self, mode: OutputMode) {
        write_block(&self.render(mode));
    }
}

/// The line printed when a project's check starts; nothing in JSON mode
#[must_use]
pub fn render_start(config: &Path, cwd: &Path, mode: OutputMode) -> String {
    match mode {
        OutputMode::Human => {
            let line = format!("\u{25cc} Using {}", paths::display_relative(config, cwd));
            format!("{}\n", line.cyan())
        },
        OutputMode::Json => String::new(),
    }
}

/// Announce on stdout that the check for `config` has started
pub fn emit_start(config: &Path, cwd: &Path, mode: OutputMode) {
    let line = render_start(config, cwd, mode);
    if !line.is_empty() {
        write_block(&line);
    }
}

fn write_block(block: &str) {
    let mut stdout = std::io::stdout().lock();
    if let Err(err) = stdout.write_all(block.as_bytes()).and_then(|()| stdout.flush()) {
        log::debug!("Failed to write report: {err}");
    }
}
