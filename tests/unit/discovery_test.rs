//! Tests for configuration discovery

use crate::common::TestTree;
use std::path::PathBuf;
use tsc_lint::adapters::{DiscoveryError, IgnoreResolver, discover_configs};

fn discover(tree: &TestTree, roots: &[&str]) -> Result<Vec<PathBuf>, DiscoveryError> {
    let roots: Vec<PathBuf> = roots.iter().map(PathBuf::from).collect();
    let ignore = IgnoreResolver::build(tree.path(), &roots, &[]).unwrap();
    discover_configs(&roots, tree.path(), &ignore)
}

#[test]
fn finds_every_config_in_sorted_order() {
    let tree = TestTree::nested();
    tree.add_file("packages/b/tsconfig.json", "{}");
    tree.add_file("packages/a/tsconfig.json", "{}");

    let found = discover(&tree, &["."]).unwrap();

    assert_eq!(
        found,
        vec![
            tree.join("packages/a/tsconfig.json"),
            tree.join("packages/b/tsconfig.json"),
            tree.join("src/lib/tsconfig.json"),
            tree.join("tsconfig.json"),
        ]
    );
}

#[test]
fn skips_dependency_and_vcs_directories() {
    let tree = TestTree::new();
    tree.add_file("tsconfig.json", "{}");
    tree.add_file("node_modules/dep/tsconfig.json", "{}");
    tree.add_file(".git/modules/x/tsconfig.json", "{}");

    assert_eq!(discover(&tree, &["."]).unwrap(), vec![tree.join("tsconfig.json")]);
}

#[test]
fn skips_ignored_configs() {
    let tree = TestTree::new();
    tree.add_file(".gitignore", "generated\n");
    tree.add_file("generated/tsconfig.json", "{}");
    tree.add_file("app/tsconfig.json", "{}");

    assert_eq!(discover(&tree, &["."]).unwrap(), vec![tree.join("app/tsconfig.json")]);
}

#[test]
fn only_searches_the_given_roots() {
    let tree = TestTree::new();
    tree.add_file("apps/web/tsconfig.json", "{}");
    tree.add_file("tools/tsconfig.json", "{}");

    assert_eq!(discover(&tree, &["apps"]).unwrap(), vec![tree.join("apps/web/tsconfig.json")]);
}

#[test]
fn missing_root_is_an_error() {
    let tree = TestTree::new();

    let err = discover(&tree, &["does-not-exist"]).unwrap_err();
    assert!(matches!(err, DiscoveryError::RootNotFound(_)));
}

#[test]
fn file_root_is_an_error() {
    let tree = TestTree::new();
    tree.add_file("README.md", "# readme\n");

    let err = discover(&tree, &["README.md"]).unwrap_err();
    assert!(matches!(err, DiscoveryError::NotADirectory(_)));
}
