//! Checker process runner
//!
//! Implements [`CheckerRunner`] by spawning `tsc` for one project at a time.
//! Standard output is captured for diagnostic parsing; standard error goes
//! straight to the terminal.

use std::path::{Path, PathBuf};
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;

use super::locator::BinaryLocator;
use crate::core::models::ProjectConfig;
use crate::core::ports::{CheckerRunner, RunOutput, TaskError};
use crate::paths::{NODE_MODULES, OUTPUT_DIR};

/// Runs `tsc --project <config>` for each project
#[derive(Debug, Clone)]
pub struct TscRunner {
    /// Binary used when a project has none of its own
    global_binary: PathBuf,
    /// Scratch directory passed as `--outDir`
    output_dir: PathBuf,
    locator: BinaryLocator,
    cwd: PathBuf,
}

impl TscRunner {
    /// Create a runner around the binary found from the working directory.
    ///
    /// Declaration output lands in `.tsc-lint` inside the `node_modules`
    /// that holds `global_binary`.
    #[must_use]
    pub fn new(global_binary: PathBuf, cwd: PathBuf) -> Self {
        let output_dir = global_binary
            .parent()
            .and_then(Path::parent)
            .map_or_else(|| cwd.join(NODE_MODULES), Path::to_path_buf)
            .join(OUTPUT_DIR);
        Self {
            global_binary,
            output_dir,
            locator: BinaryLocator::tsc(),
            cwd,
        }
    }

    /// The binary to run for `project`: the nearest one installed at or
    /// above its directory, else the global one.
    #[must_use]
    pub fn binary_for(&self, project: &ProjectConfig) -> PathBuf {
        self.locator.locate(&project.dir).unwrap_or_else(|| self.global_binary.clone())
    }

    /// Command-line arguments for checking `project`
    #[must_use]
    pub fn args(&self, project: &ProjectConfig) -> Vec<String> {
        let mut args = vec![
            "--project".to_string(),
            project.path.display().to_string(),
            "--outDir".to_string(),
            self.output_dir.display().to_string(),
        ];
        // With noEmit set the checker rejects the declaration flags.
        if !project.no_emit {
            args.push("--declaration".to_string());
            args.push("--emitDeclarationOnly".to_string());
        }
        args
    }
}

#[async_trait]
impl CheckerRunner for TscRunner {
    async fn run(&self, project: &ProjectConfig) -> Result<RunOutput, TaskError> {
        let binary = self.binary_for(project);
        let args = self.args(project);
        log::debug!("Running {} {}", binary.display(), args.join(" "));

        let output = Command::new(&binary)
            .args(&args)
            .current_dir(&self.cwd)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .output()
            .await
            .map_err(|source| TaskError::Launch { binary, source })?;

        let run = RunOutput {
            exit_code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        };
        log::debug!("{} exited with {:?}", project.path.display(), run.exit_code);
        Ok(run)
    }
}
