//! Task scheduler
//!
//! Runs the checker once per project with at most `limit` processes alive
//! at a time. Every task is independent: a failing task never cancels its
//! siblings, and every outcome is collected. Outcomes are handed back in
//! the order tasks finish, not the order they were started.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::sync::Semaphore;
use tokio::task::JoinSet;

use crate::core::models::{ProjectConfig, TaskResult};
use crate::core::ports::{CheckerRunner, TaskError};
use crate::core::services::{OwnershipMap, diagnostics};

/// A task that failed to produce a usable result
#[derive(Debug)]
pub struct TaskFailure {
    /// The project whose task failed
    pub project: ProjectConfig,
    /// What went wrong
    pub error: TaskError,
}

/// Outcome of one task
pub type TaskOutcome = Result<TaskResult, TaskFailure>;

/// Run the checker for every project.
///
/// `on_start` is called from inside each task once it holds a slot, right
/// before the checker is launched. `on_complete` is called once per project
/// as soon as its task finishes, from the coordinating task, so it never
/// runs concurrently with itself. The returned outcomes are in completion
/// order.
pub async fn run_projects(
    runner: Arc<dyn CheckerRunner>,
    projects: Vec<ProjectConfig>,
    ownership: Arc<OwnershipMap>,
    limit: usize,
    cwd: &Path,
    on_start: impl Fn(&ProjectConfig) + Send + Sync + 'static,
    mut on_complete: impl FnMut(&TaskOutcome) + Send,
) -> Vec<TaskOutcome> {
    let semaphore = Arc::new(Semaphore::new(limit.max(1)));
    let on_start = Arc::new(on_start);
    let mut tasks = JoinSet::new();
    // Lets a panicked task still be reported against its project.
    let mut pending = HashMap::with_capacity(projects.len());

    for project in projects {
        let semaphore = Arc::clone(&semaphore);
        let runner = Arc::clone(&runner);
        let ownership = Arc::clone(&ownership);
        let on_start = Arc::clone(&on_start);
        let cwd: PathBuf = cwd.to_path_buf();
        let task_project = project.clone();

        let handle = tasks.spawn(async move {
            let _permit = semaphore.acquire_owned().await.ok();
            on_start(&task_project);
            check_project(runner.as_ref(), task_project, &cwd, &ownership).await
        });
        pending.insert(handle.id(), project);
    }

    let mut outcomes = Vec::with_capacity(pending.len());
    while let Some(joined) = tasks.join_next_with_id().await {
        let outcome = match joined {
            Ok((id, outcome)) => {
                pending.remove(&id);
                outcome
            },
            Err(err) => match pending.remove(&err.id()) {
                Some(project) => Err(TaskFailure {
                    project,
                    error: TaskError::Aborted(err.to_string()),
                }),
                None => {
                    log::warn!("Lost track of a finished task: {err}");
                    continue;
                },
            },
        };
        on_complete(&outcome);
        outcomes.push(outcome);
    }

    outcomes
}

async fn check_project(
    runner: &dyn CheckerRunner,
    project: ProjectConfig,
    cwd: &Path,
    ownership: &OwnershipMap,
) -> TaskOutcome {
    let run = match runner.run(&project).await {
        Ok(run) => run,
        Err(error) => return Err(TaskFailure { project, error }),
    };
    match diagnostics::interpret(project.clone(), run, cwd, ownership) {
        Ok(result) => Ok(result),
        Err(error) => Err(TaskFailure { project, error }),
    }
}
