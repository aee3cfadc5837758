//! Ownership deduplication
//!
//! When project configurations overlap, every source file must be checked
//! by exactly one of them. Projects are ordered by specificity and each
//! claims the files no earlier project has claimed.
//!
//! Specificity is approximated by the length of the configuration path:
//! a nested `tsconfig.json` has a longer path than its ancestors, so it is
//! ordered first and its settings win for the files it covers. This is a
//! string heuristic, not a directory-nesting check; ties fall back to
//! lexicographic path order so the result is deterministic.

use std::cmp::Reverse;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::path::{Path, PathBuf};

use crate::core::models::ProjectConfig;

/// Maps each claimed source file to the configuration that owns it
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OwnershipMap {
    owners: HashMap<PathBuf, PathBuf>,
}

impl OwnershipMap {
    /// Configuration path owning `file`, if any
    #[must_use]
    pub fn owner_of(&self, file: &Path) -> Option<&Path> {
        self.owners.get(file).map(PathBuf::as_path)
    }

    /// Number of claimed files
    #[must_use]
    pub fn len(&self) -> usize {
        self.owners.len()
    }

    /// Whether no file is claimed
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.owners.is_empty()
    }
}

/// Sort projects into claiming order: longest configuration path first.
pub fn sort_by_specificity(projects: &mut [ProjectConfig]) {
    projects.sort_by(|a, b| {
        Reverse(a.path.as_os_str().len())
            .cmp(&Reverse(b.path.as_os_str().len()))
            .then_with(|| a.path.cmp(&b.path))
    });
}

/// Assign every file to exactly one project.
///
/// Returns the surviving projects (in claiming order, each holding only the
/// files it owns) and the ownership map. Projects left without files are
/// dropped.
#[must_use]
pub fn deduplicate(mut projects: Vec<ProjectConfig>) -> (Vec<ProjectConfig>, OwnershipMap) {
    sort_by_specificity(&mut projects);

    let (owners, kept) = projects.into_iter().fold(
        (HashMap::new(), Vec::new()),
        |(mut owners, mut kept): (HashMap<PathBuf, PathBuf>, Vec<ProjectConfig>), mut project| {
            let config = project.path.clone();
            project.retain_files(|file| match owners.entry(file.clone()) {
                Entry::Occupied(_) => false,
                Entry::Vacant(slot) => {
                    slot.insert(config.clone());
                    true
                },
            });

            if project.is_empty() {
                log::debug!("No files left to check for {}", config.display());
            } else {
                kept.push(project);
            }
            (owners, kept)
        },
    );

    (kept, OwnershipMap { owners })
}
