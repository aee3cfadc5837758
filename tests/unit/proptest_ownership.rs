//! Property-based tests for ownership deduplication
//!
//! Uses proptest to verify that deduplication partitions the resolved files.

use proptest::prelude::*;
use std::collections::BTreeSet;
use std::path::PathBuf;
use tsc_lint::core::models::ProjectConfig;
use tsc_lint::core::services::deduplicate;

/// Projects with random config paths, each covering a random subset of a
/// small shared file pool so overlaps are common
fn projects() -> impl Strategy<Value = Vec<ProjectConfig>> {
    prop::collection::vec(
        ("[a-c]{1,3}(/[a-c]{1,3}){0,2}", prop::collection::btree_set(0usize..12, 1..8)),
        1..6,
    )
    .prop_map(|specs| {
        specs
            .into_iter()
            .enumerate()
            .map(|(i, (dir, files))| {
                ProjectConfig::new(
                    PathBuf::from(format!("/repo/{dir}/{i}/tsconfig.json")),
                    files
                        .into_iter()
                        .map(|f| PathBuf::from(format!("/repo/src/f{f}.ts")))
                        .collect(),
                    false,
                )
            })
            .collect()
    })
}

proptest! {
    /// Owned sets cover exactly the resolved files
    #[test]
    fn owned_union_equals_resolved_union(projects in projects()) {
        let resolved: BTreeSet<PathBuf> =
            projects.iter().flat_map(|p| p.files().iter().cloned()).collect();

        let (kept, ownership) = deduplicate(projects);
        let owned: BTreeSet<PathBuf> =
            kept.iter().flat_map(|p| p.files().iter().cloned()).collect();

        prop_assert_eq!(&owned, &resolved);
        prop_assert_eq!(ownership.len(), resolved.len());
    }

    /// No file is owned twice
    #[test]
    fn owned_sets_are_disjoint(projects in projects()) {
        let (kept, _) = deduplicate(projects);
        let total: usize = kept.iter().map(|p| p.files().len()).sum();
        let distinct: BTreeSet<&PathBuf> = kept.iter().flat_map(|p| p.files()).collect();

        prop_assert_eq!(total, distinct.len());
    }

    /// Every surviving project owns at least one file, and the map agrees
    /// with the project holding each file
    #[test]
    fn ownership_map_matches_projects(projects in projects()) {
        let (kept, ownership) = deduplicate(projects);

        for project in &kept {
            prop_assert!(!project.is_empty());
            for file in project.files() {
                prop_assert_eq!(ownership.owner_of(file), Some(project.path.as_path()));
            }
        }
    }

    /// A file goes to the longest configuration path that covers it
    #[test]
    fn longest_config_path_wins(projects in projects()) {
        let original = projects.clone();
        let (_, ownership) = deduplicate(projects);

        for project in &original {
            for file in project.files() {
                let owner = ownership.owner_of(file).unwrap();
                prop_assert!(owner.as_os_str().len() >= project.path.as_os_str().len());
            }
        }
    }
}
