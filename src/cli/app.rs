//! CLI definitions and entry point

use std::path::PathBuf;

use clap::Parser;

use super::commands;
use tsc_lint::output::OutputMode;

/// tsc-lint - Type-check every tsconfig.json in a source tree
#[derive(Parser, Debug)]
#[command(
    name = "tsc-lint",
    version,
    about = "Type-check every tsconfig.json in a source tree",
    long_about = "Find every tsconfig.json below the given directories and run tsc for each,\n\
                  in parallel.\n\n\
                  Each source file is checked by exactly one project: the one with the most\n\
                  specific configuration. Paths matched by .gitignore files are skipped."
)]
pub struct Cli {
    /// Directories to search (default: current directory)
    #[arg(value_name = "DIRS")]
    pub dirs: Vec<PathBuf>,

    /// Ignore paths matching the given gitignore-style pattern
    #[arg(short, long, value_name = "PATTERN")]
    pub ignore: Vec<String>,

    /// Maximum number of tsc processes at once (default: number of CPUs)
    #[arg(short, long, value_name = "N")]
    pub jobs: Option<usize>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long)]
    pub json: bool,
}

/// Run the CLI; `Ok(false)` means the check found problems
pub async fn run() -> anyhow::Result<bool> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    commands::lint(cli.dirs, cli.ignore, cli.jobs, output_mode).await
}
