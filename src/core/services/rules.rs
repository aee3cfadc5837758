//! Ignore rule rewriting
//!
//! All rule files are merged into a single matcher rooted at the working
//! directory. Patterns from other directories have to be rewritten so they
//! keep meaning what they meant where they were declared.

use crate::core::models::is_blank_or_comment;

/// Rewrite a line from a rule file above the working directory.
///
/// Root-anchored patterns (`/dist`) only make sense inside their own
/// directory and are dropped (`None`). Everything else, negations included,
/// is kept as is. Comments and blank lines are returned untouched.
#[must_use]
pub fn rewrite_ancestor_line(line: &str) -> Option<String> {
    let line = line.trim_end_matches('\r');
    if is_blank_or_comment(line) {
        return Some(line.to_string());
    }

    let (_, pattern) = split_negation(line);
    if pattern.starts_with('/') {
        return None;
    }
    Some(line.to_string())
}

/// Rewrite a line from a rule file nested below the working directory.
///
/// `dir` is the rule file's directory relative to the working directory,
/// with forward slashes. `/x` becomes `/dir/x`; `x` becomes `dir/**/x`.
/// Negations are preserved; comments and blank lines are returned untouched.
#[must_use]
pub fn rewrite_nested_line(line: &str, dir: &str) -> String {
    let line = line.trim_end_matches('\r');
    if is_blank_or_comment(line) {
        return line.to_string();
    }

    let (prefix, pattern) = split_negation(line);
    let dir = dir.trim_matches('/');

    let rewritten = pattern.strip_prefix('/').map_or_else(
        || format!("{dir}/**/{}", pattern.trim_start_matches("./")),
        |anchored| format!("/{dir}/{anchored}"),
    );
    format!("{prefix}{rewritten}")
}

fn split_negation(line: &str) -> (&str, &str) {
    line.strip_prefix('!').map_or(("", line), |rest| ("!", rest))
}
