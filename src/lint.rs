//! Run orchestration
//!
//! Ties the pieces together: ignore rules, discovery, file-set resolution,
//! ownership, scheduling and reporting. The CLI layer only supplies
//! options, the checker runner and the output mode.

use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;

use crate::adapters::{IgnoreResolver, discover_configs, resolve_project};
use crate::core::models::{ProjectConfig, TaskResult};
use crate::core::ports::CheckerRunner;
use crate::core::services::{OwnershipMap, TaskFailure, deduplicate, run_projects};
use crate::output::{self, OutputMode, ProjectReport, RunSummary};

/// What to check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintOptions {
    /// Working directory; relative paths resolve against it
    pub cwd: PathBuf,
    /// Directories to search for configurations
    pub roots: Vec<PathBuf>,
    /// Extra gitignore-style patterns
    pub ignore: Vec<String>,
}

/// The projects to check, after ownership is settled
#[derive(Debug, Clone)]
pub struct Plan {
    /// Projects in claiming order, each holding only the files it owns
    pub projects: Vec<ProjectConfig>,
    /// Owner of every claimed file
    pub ownership: OwnershipMap,
    /// Number of configurations found before empty ones were dropped
    pub discovered: usize,
}

/// Find and resolve every project under the search roots.
///
/// Fails on the first configuration that cannot be read, before anything
/// is scheduled.
pub fn plan(options: &LintOptions) -> anyhow::Result<Plan> {
    let ignore = IgnoreResolver::build(&options.cwd, &options.roots, &options.ignore)
        .context("failed to load ignore rules")?;

    let mut configs = discover_configs(&options.roots, &options.cwd, &ignore)?;
    configs.sort();
    configs.dedup();
    log::debug!("Discovered {} configuration(s)", configs.len());

    let mut resolved = Vec::with_capacity(configs.len());
    for config in &configs {
        if let Some(project) = resolve_project(config)? {
            resolved.push(project);
        }
    }

    let (projects, ownership) = deduplicate(resolved);
    Ok(Plan {
        projects,
        ownership,
        discovered: configs.len(),
    })
}

/// Everything a run produced
#[derive(Debug, Default)]
pub struct LintOutcome {
    /// Finished checks, in completion order
    pub results: Vec<TaskResult>,
    /// Tasks that failed to produce a result, in completion order
    pub failures: Vec<TaskFailure>,
}

impl LintOutcome {
    /// Whether every project checked clean and no task failed
    #[must_use]
    pub fn passed(&self) -> bool {
        self.failures.is_empty() && self.results.iter().all(TaskResult::passed)
    }

    /// Totals for the run
    #[must_use]
    pub fn summary(&self) -> RunSummary {
        RunSummary {
            passed: self.passed(),
            projects: self.results.len() + self.failures.len(),
            errors: self.results.iter().map(|r| r.diagnostics.len()).sum(),
            failed_tasks: self.failures.len(),
        }
    }
}

/// Check every project in `plan`.
///
/// A project is announced when its checker starts and reported as soon as
/// it completes. Diagnostics are kept only for the files `plan.ownership`
/// gives to the reporting project.
pub async fn execute(
    plan: Plan,
    runner: Arc<dyn CheckerRunner>,
    jobs: usize,
    cwd: &Path,
    mode: OutputMode,
) -> LintOutcome {
    let start_cwd = cwd.to_path_buf();
    let outcomes = run_projects(
        runner,
        plan.projects,
        Arc::new(plan.ownership),
        jobs,
        cwd,
        move |project| output::emit_start(&project.path, &start_cwd, mode),
        |outcome| {
            if let Ok(result) = outcome {
                ProjectReport::from_result(result, cwd).emit(mode);
            }
        },
    )
    .await;

    let mut lint = LintOutcome::default();
    for outcome in outcomes {
        match outcome {
            Ok(result) => lint.results.push(result),
            Err(failure) => lint.failures.push(failure),
        }
    }
    lint
}

/// Concurrency cap used when none is configured: one task per processing
/// unit.
#[must_use]
pub fn default_jobs() -> usize {
    std::thread::available_parallelism().map_or(1, NonZeroUsize::get)
}
