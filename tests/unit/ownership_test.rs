//! Tests for ownership deduplication against real trees

use crate::common::TestTree;
use tsc_lint::adapters::resolve_project;
use tsc_lint::core::models::ProjectConfig;
use tsc_lint::core::services::deduplicate;

fn resolve_all(tree: &TestTree, configs: &[&str]) -> Vec<ProjectConfig> {
    configs
        .iter()
        .filter_map(|rel| resolve_project(&tree.join(rel)).unwrap())
        .collect()
}

#[test]
fn nested_config_owns_shared_file() {
    let tree = TestTree::nested();
    let projects = resolve_all(&tree, &["tsconfig.json", "src/lib/tsconfig.json"]);

    // Both configurations cover the nested file before deduplication.
    let shared = tree.join("src/lib/a.ts");
    assert!(projects.iter().all(|p| p.files().contains(&shared)));

    let (kept, ownership) = deduplicate(projects);

    let nested = tree.join("src/lib/tsconfig.json");
    let root = tree.join("tsconfig.json");
    assert_eq!(ownership.owner_of(&tree.join("src/lib/a.ts")), Some(nested.as_path()));
    assert_eq!(ownership.owner_of(&tree.join("src/main.ts")), Some(root.as_path()));

    let root_project = kept.iter().find(|p| p.path == root).unwrap();
    assert_eq!(root_project.files(), &[tree.join("src/main.ts")]);
}

#[test]
fn fully_shadowed_config_is_dropped() {
    let tree = TestTree::new();
    tree.add_file("tsconfig.json", r#"{ "include": ["pkg/**/*"] }"#);
    tree.add_file("pkg/tsconfig.json", "{}");
    tree.add_file("pkg/index.ts", "");

    let projects = resolve_all(&tree, &["tsconfig.json", "pkg/tsconfig.json"]);
    let (kept, ownership) = deduplicate(projects);

    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].path, tree.join("pkg/tsconfig.json"));
    assert_eq!(ownership.len(), 1);
}

#[test]
fn disjoint_configs_keep_all_files() {
    let tree = TestTree::new();
    tree.add_file("a/tsconfig.json", "{}");
    tree.add_file("a/x.ts", "");
    tree.add_file("b/tsconfig.json", "{}");
    tree.add_file("b/y.ts", "");

    let projects = resolve_all(&tree, &["a/tsconfig.json", "b/tsconfig.json"]);
    let (kept, ownership) = deduplicate(projects);

    assert_eq!(kept.len(), 2);
    assert_eq!(ownership.len(), 2);
}
