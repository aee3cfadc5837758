//! Tests for the Output module
//!
//! Reports render either as human-readable blocks or as one JSON object per
//! line.

use std::path::{Path, PathBuf};
use tsc_lint::core::models::{Diagnostic, ProjectConfig, TaskResult};
use tsc_lint::output::{OutputMode, ProjectReport, RunSummary};

fn failed_result() -> TaskResult {
    TaskResult {
        project: ProjectConfig::new(
            PathBuf::from("/repo/app/tsconfig.json"),
            vec![PathBuf::from("/repo/app/main.ts")],
            false,
        ),
        output: String::new(),
        exit_code: Some(2),
        diagnostics: vec![
            Diagnostic {
                file: PathBuf::from("/repo/app/main.ts"),
                line: 4,
                column: 10,
                code: "TS2345".to_string(),
                message: "Argument of type 'string' is not assignable.".to_string(),
            },
            Diagnostic {
                file: PathBuf::from("/repo/app/main.ts"),
                line: 9,
                column: 1,
                code: "TS2304".to_string(),
                message: "Cannot find name 'x'.".to_string(),
            },
        ],
    }
}

// =============================================================================
// OutputMode Tests
// =============================================================================

#[test]
fn output_mode_default() {
    assert_eq!(OutputMode::default(), OutputMode::Human);
}

// =============================================================================
// ProjectReport Tests
// =============================================================================

#[test]
fn human_report_lists_every_diagnostic() {
    colored::control::set_override(false);
    let report = ProjectReport::from_result(&failed_result(), Path::new("/repo"));
    let text = report.render(OutputMode::Human);

    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].contains("./app/tsconfig.json"));
    assert!(lines[0].contains("2 error(s)"));
    assert_eq!(
        lines[1],
        "  ./app/main.ts:4:10 - error TS2345: Argument of type 'string' is not assignable."
    );
    assert_eq!(lines[2], "  ./app/main.ts:9:1 - error TS2304: Cannot find name 'x'.");
}

#[test]
fn json_report_serialization() {
    let report = ProjectReport::from_result(&failed_result(), Path::new("/repo"));
    let value: serde_json::Value = serde_json::from_str(&report.render(OutputMode::Json)).unwrap();

    assert_eq!(value["config"], "./app/tsconfig.json");
    assert_eq!(value["passed"], false);
    assert_eq!(value["error_count"], 2);
    assert_eq!(value["diagnostics"][0]["code"], "TS2345");
    assert_eq!(value["diagnostics"][1]["line"], 9);
}

// =============================================================================
// RunSummary Tests
// =============================================================================

#[test]
fn summary_json_is_wrapped() {
    let summary = RunSummary {
        passed: false,
        projects: 3,
        errors: 2,
        failed_tasks: 1,
    };
    let value: serde_json::Value =
        serde_json::from_str(&summary.render(OutputMode::Json)).unwrap();

    assert_eq!(value["summary"]["projects"], 3);
    assert_eq!(value["summary"]["failed_tasks"], 1);
    assert_eq!(value["summary"]["passed"], false);
}

#[test]
fn summary_human_counts() {
    colored::control::set_override(false);
    let summary = RunSummary {
        passed: true,
        projects: 2,
        errors: 0,
        failed_tasks: 0,
    };

    let text = summary.render(OutputMode::Human);
    assert!(text.contains("2 project(s), 0 error(s), 0 failed task(s)"));
}
