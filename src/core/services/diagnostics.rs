//! Diagnostic extraction and attribution
//!
//! The checker prints one diagnostic per line:
//!
//! ```text
//! src/app.ts(12,5): error TS2322: Type 'string' is not assignable to type 'number'.
//! ```
//!
//! Any other line (banners, summaries, continuation text) is noise.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::core::models::{Diagnostic, ProjectConfig, TaskResult};
use crate::core::ports::{RunOutput, TaskError};
use crate::core::services::OwnershipMap;
use crate::paths;

static DIAGNOSTIC_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^(?P<file>.+?)\((?P<line>\d+),(?P<column>\d+)\): ",
        r"error (?P<code>[^:\s]+): (?P<message>.*)$",
    ))
    .expect("diagnostic pattern is valid")
});

/// Parse every diagnostic-shaped line in `output`.
///
/// Relative file paths are resolved against `cwd`, the directory the
/// checker was run from.
#[must_use]
pub fn parse_diagnostics(output: &str, cwd: &Path) -> Vec<Diagnostic> {
    output
        .lines()
        .filter_map(|line| {
            let caps = DIAGNOSTIC_LINE.captures(line.trim_end_matches('\r'))?;
            Some(Diagnostic {
                file: paths::absolutize(cwd, Path::new(&caps["file"])),
                line: caps["line"].parse().ok()?,
                column: caps["column"].parse().ok()?,
                code: caps["code"].to_string(),
                message: caps["message"].to_string(),
            })
        })
        .collect()
}

/// Keep only the diagnostics for files `config` owns according to
/// `ownership`.
///
/// Diagnostics for other files belong to whichever project owns them and
/// are reported there, if at all.
#[must_use]
pub fn owned_diagnostics(
    diagnostics: Vec<Diagnostic>,
    config: &Path,
    ownership: &OwnershipMap,
) -> Vec<Diagnostic> {
    diagnostics
        .into_iter()
        .filter(|d| {
            let owned = ownership.owner_of(&d.file) == Some(config);
            if !owned {
                log::debug!(
                    "Dropping {} for {}: not owned by {}",
                    d.code,
                    d.file.display(),
                    config.display()
                );
            }
            owned
        })
        .collect()
}

/// Turn a finished checker run into a task result.
///
/// A clean exit yields no diagnostics. A failed exit must print at least one
/// diagnostic-shaped line, otherwise the run itself is treated as broken.
pub fn interpret(
    project: ProjectConfig,
    run: RunOutput,
    cwd: &Path,
    ownership: &OwnershipMap,
) -> Result<TaskResult, TaskError> {
    if run.success() {
        return Ok(TaskResult {
            project,
            output: run.stdout,
            exit_code: run.exit_code,
            diagnostics: Vec::new(),
        });
    }

    let parsed = parse_diagnostics(&run.stdout, cwd);
    if parsed.is_empty() {
        return Err(TaskError::Unrecognized {
            exit_code: run.exit_code,
            output: run.stdout,
        });
    }

    let diagnostics = owned_diagnostics(parsed, &project.path, ownership);
    Ok(TaskResult {
        project,
        output: run.stdout,
        exit_code: run.exit_code,
        diagnostics,
    })
}
