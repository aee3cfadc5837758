//! Layered `.gitignore` resolution
//!
//! Rule files are gathered from three places and merged, in this order,
//! into a single matcher rooted at the working directory:
//!
//! 1. The fixed `node_modules` exclusion
//! 2. Every ancestor of the working directory, root-most first
//! 3. Rule files nested below the search roots
//! 4. Patterns supplied by the caller
//!
//! Later rules override earlier ones, so a nested `!pattern` can re-include
//! what an ancestor excluded.

use std::fs;
use std::path::{Component, Path, PathBuf};

use ignore::gitignore::{Gitignore, GitignoreBuilder};
use thiserror::Error;
use walkdir::WalkDir;

use crate::core::models::{IgnoreRule, IgnoreRuleSet};
use crate::core::services::{rewrite_ancestor_line, rewrite_nested_line};
use crate::paths::{self, GITIGNORE, NODE_MODULES};

/// Errors that can occur while loading ignore rules
#[derive(Debug, Error)]
pub enum IgnoreError {
    /// A rule file could not be read
    #[error("failed to read {}: {source}", path.display())]
    Read {
        /// Path of the rule file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The merged matcher could not be built
    #[error("failed to build ignore matcher: {0}")]
    Build(#[from] ignore::Error),
}

/// Answers "is this path excluded" for the whole run
#[derive(Debug, Clone)]
pub struct IgnoreResolver {
    cwd: PathBuf,
    matcher: Gitignore,
}

impl IgnoreResolver {
    /// Load every rule that applies to `cwd` and the given search roots.
    pub fn build(cwd: &Path, roots: &[PathBuf], patterns: &[String]) -> Result<Self, IgnoreError> {
        let mut collector = RuleCollector::new(cwd);

        collector.add_line(NODE_MODULES, cwd);
        collector.add_ancestor_files()?;
        collector.add_nested_files(roots)?;

        for pattern in patterns {
            collector.add_line(pattern, cwd);
        }

        collector.finish()
    }

    /// Whether `path` (absolute, or relative to the working directory) is
    /// excluded. Paths outside the working directory are never excluded.
    #[must_use]
    pub fn is_ignored(&self, path: &Path) -> bool {
        self.matches(path, false)
    }

    /// Like [`Self::is_ignored`], for a directory
    #[must_use]
    pub fn is_dir_ignored(&self, path: &Path) -> bool {
        self.matches(path, true)
    }

    fn matches(&self, path: &Path, is_dir: bool) -> bool {
        matches_under(&self.matcher, &self.cwd, path, is_dir)
    }
}

/// Compile `rules` into a matcher rooted at `cwd`, in application order.
fn compile(cwd: &Path, rules: &IgnoreRuleSet) -> Result<Gitignore, IgnoreError> {
    let mut builder = GitignoreBuilder::new(cwd);
    for rule in rules {
        builder.add_line(None, &rule.line())?;
    }
    Ok(builder.build()?)
}

fn matches_under(matcher: &Gitignore, cwd: &Path, path: &Path, is_dir: bool) -> bool {
    let relative = if path.is_absolute() {
        match path.strip_prefix(cwd) {
            Ok(relative) => relative,
            Err(_) => return false,
        }
    } else {
        path
    };

    if relative.as_os_str().is_empty()
        || relative.components().any(|c| matches!(c, Component::ParentDir))
    {
        return false;
    }

    matcher.matched_path_or_any_parents(relative, is_dir).is_ignore()
}

/// Accumulates rules from every scope
struct RuleCollector {
    cwd: PathBuf,
    rules: IgnoreRuleSet,
}

impl RuleCollector {
    fn new(cwd: &Path) -> Self {
        Self {
            cwd: cwd.to_path_buf(),
            rules: IgnoreRuleSet::new(),
        }
    }

    fn add_line(&mut self, line: &str, scope: &Path) {
        let Some(rule) = IgnoreRule::parse(line, scope) else {
            return;
        };
        match GitignoreBuilder::new(&self.cwd).add_line(None, &rule.line()) {
            Ok(_) => self.rules.push(rule),
            Err(err) => {
                log::warn!("Skipping ignore pattern {line:?} from {}: {err}", rule.scope.display());
            },
        }
    }

    fn add_file(&mut self, path: &Path, lines: &[String]) {
        let scope = path.parent().unwrap_or(&self.cwd).to_path_buf();
        log::debug!("Ignoring paths from {}", path.display());
        for line in lines {
            if IgnoreRule::parse(line, &scope).is_some() {
                log::debug!("  {line}");
            }
            self.add_line(line, &scope);
        }
    }

    /// Rule files in the working directory and every ancestor.
    ///
    /// Anchored patterns from ancestors are dropped since they are relative
    /// to a directory the matcher is not rooted at.
    fn add_ancestor_files(&mut self) -> Result<(), IgnoreError> {
        let mut found = Vec::new();
        paths::find_up(&self.cwd, |dir, entries| {
            if entries.iter().any(|name| name == GITIGNORE) {
                found.push(dir.join(GITIGNORE));
            }
            false
        });

        for path in found.into_iter().rev() {
            let content = read_rule_file(&path)?;
            let lines: Vec<String> = if path.parent() == Some(self.cwd.as_path()) {
                content.lines().map(str::to_string).collect()
            } else {
                content.lines().filter_map(rewrite_ancestor_line).collect()
            };
            self.add_file(&path, &lines);
        }
        Ok(())
    }

    /// Rule files below the search roots, each rewritten to stay scoped to
    /// its own directory.
    fn add_nested_files(&mut self, roots: &[PathBuf]) -> Result<(), IgnoreError> {
        let pruning = compile(&self.cwd, &self.rules)?;
        let mut found = Vec::new();

        for root in roots {
            let root = paths::absolutize(&self.cwd, root);
            let walker = WalkDir::new(&root).follow_links(true).into_iter().filter_entry(|entry| {
                if entry.depth() == 0 || !entry.file_type().is_dir() {
                    return true;
                }
                let name = entry.file_name().to_string_lossy();
                !paths::is_never_walked(&name)
                    && !matches_under(&pruning, &self.cwd, entry.path(), true)
            });

            for entry in walker {
                let entry = match entry {
                    Ok(entry) => entry,
                    Err(err) => {
                        log::debug!("Skipping unreadable entry: {err}");
                        continue;
                    },
                };
                if entry.file_type().is_file() && entry.file_name() == GITIGNORE {
                    found.push(paths::normalize(entry.path()));
                }
            }
        }

        // Parents before children, so a parent's rules can exclude a child's file.
        found.sort_by(|a, b| {
            a.components().count().cmp(&b.components().count()).then_with(|| a.cmp(b))
        });
        found.dedup();

        let root_file = self.cwd.join(GITIGNORE);
        for path in found {
            if path == root_file {
                continue;
            }
            let Some(dir) = path.parent().and_then(|p| p.strip_prefix(&self.cwd).ok()) else {
                log::debug!("Skipping {} outside the working directory", path.display());
                continue;
            };
            let current = compile(&self.cwd, &self.rules)?;
            if matches_under(&current, &self.cwd, &path, false) {
                log::debug!("Skipping ignored {}", path.display());
                continue;
            }

            let dir = paths::to_slash(dir);
            let content = read_rule_file(&path)?;
            let lines: Vec<String> =
                content.lines().map(|line| rewrite_nested_line(line, &dir)).collect();
            self.add_file(&path, &lines);
        }
        Ok(())
    }

    fn finish(self) -> Result<IgnoreResolver, IgnoreError> {
        let matcher = compile(&self.cwd, &self.rules)?;
        log::debug!("Loaded {} ignore rule(s)", matcher.num_ignores() + matcher.num_whitelists());
        Ok(IgnoreResolver {
            matcher,
            cwd: self.cwd,
        })
    }
}

fn read_rule_file(path: &Path) -> Result<String, IgnoreError> {
    fs::read_to_string(path).map_err(|source| IgnoreError::Read {
        path: path.to_path_buf(),
        source,
    })
}
