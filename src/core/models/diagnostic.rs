//! Diagnostic model

use std::path::PathBuf;

use serde::Serialize;

/// One problem reported by the checker
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// Absolute path of the file the problem is in
    pub file: PathBuf,
    /// Line number (1-indexed)
    pub line: u32,
    /// Column number (1-indexed)
    pub column: u32,
    /// Diagnostic code, e.g. `TS2322`
    pub code: String,
    /// Human-readable message
    pub message: String,
}
