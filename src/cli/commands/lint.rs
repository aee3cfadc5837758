//! Check every project below the search roots

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use colored::Colorize;

use tsc_lint::adapters::{BinaryLocator, TscRunner};
use tsc_lint::config::Settings;
use tsc_lint::core::ports::TaskError;
use tsc_lint::core::services::TaskFailure;
use tsc_lint::lint::{self, LintOptions};
use tsc_lint::output::OutputMode;
use tsc_lint::paths;

/// Run the checker for every project and report the results.
///
/// Returns `Ok(false)` when any project has diagnostics or any task failed.
pub async fn lint(
    dirs: Vec<PathBuf>,
    ignore: Vec<String>,
    jobs: Option<usize>,
    mode: OutputMode,
) -> anyhow::Result<bool> {
    let cwd = std::env::current_dir().context("cannot determine working directory")?;

    let Settings {
        roots: default_roots,
        ignore: default_ignore,
        jobs: default_jobs,
    } = Settings::load(&cwd)?;

    // Command-line roots replace configured ones; ignore patterns add up.
    let roots = match (dirs.is_empty(), default_roots.is_empty()) {
        (false, _) => dirs,
        (true, false) => default_roots,
        (true, true) => vec![PathBuf::from(".")],
    };
    let ignore = default_ignore.into_iter().chain(ignore).collect();
    let jobs = jobs.or(default_jobs).unwrap_or_else(lint::default_jobs).max(1);

    let tsc = BinaryLocator::tsc().locate(&cwd).context("tsc binary not found")?;
    log::debug!("Using {}", tsc.display());

    let plan = lint::plan(&LintOptions {
        cwd: cwd.clone(),
        roots,
        ignore,
    })?;
    log::debug!(
        "{} of {} configuration(s) have files to check",
        plan.projects.len(),
        plan.discovered
    );

    let runner = Arc::new(TscRunner::new(tsc, cwd.clone()));
    let outcome = lint::execute(plan, runner, jobs, &cwd, mode).await;

    for failure in &outcome.failures {
        report_failure(failure, &cwd);
    }
    outcome.summary().emit(mode);

    Ok(outcome.passed())
}

fn report_failure(failure: &TaskFailure, cwd: &Path) {
    let config = paths::display_relative(&failure.project.path, cwd);
    eprintln!("{} {config}: {}", "\u{2717}".red().bold(), failure.error);
    if let TaskError::Unrecognized { output, .. } = &failure.error
        && !output.trim().is_empty()
    {
        eprintln!("{}", output.trim_end());
    }
}
