//! Tests for configuration loading and file-set resolution

use crate::common::TestTree;
use tsc_lint::adapters::tsconfig::ConfigError;
use tsc_lint::adapters::{load_tsconfig, resolve_project};

// =============================================================================
// File-set resolution
// =============================================================================

#[test]
fn empty_include_yields_no_project() {
    let tree = TestTree::new();
    let config = tree.add_file("tsconfig.json", r#"{ "include": [] }"#);
    tree.add_file("index.ts", "");

    assert!(resolve_project(&config).unwrap().is_none());
}

#[test]
fn include_directory_covers_its_contents() {
    let tree = TestTree::new();
    let config = tree.add_file("tsconfig.json", r#"{ "include": ["src"] }"#);
    tree.add_file("src/a.ts", "");
    tree.add_file("src/nested/b.ts", "");
    tree.add_file("scripts/c.ts", "");

    let project = resolve_project(&config).unwrap().unwrap();

    assert_eq!(project.files(), &[tree.join("src/a.ts"), tree.join("src/nested/b.ts")]);
}

#[test]
fn members_are_absolute_and_sorted() {
    let tree = TestTree::new();
    let config = tree.add_file("tsconfig.json", "{}");
    tree.add_file("z.ts", "");
    tree.add_file("a/b.ts", "");

    let project = resolve_project(&config).unwrap().unwrap();

    assert!(project.files().iter().all(|f| f.is_absolute()));
    assert_eq!(project.files(), &[tree.join("a/b.ts"), tree.join("z.ts")]);
}

#[test]
fn default_exclude_skips_package_directories() {
    let tree = TestTree::new();
    let config = tree.add_file("tsconfig.json", "{}");
    tree.add_file("index.ts", "");
    tree.add_file("bower_components/x/index.ts", "");
    tree.add_file("jspm_packages/y/index.ts", "");
    tree.add_file("lib/node_modules/z/index.d.ts", "");

    let project = resolve_project(&config).unwrap().unwrap();

    assert_eq!(project.files(), &[tree.join("index.ts")]);
}

#[test]
fn inherited_include_stays_relative_to_base() {
    let tree = TestTree::new();
    tree.add_file("configs/base.json", r#"{ "include": ["../shared/**/*"] }"#);
    let config = tree.add_file("app/tsconfig.json", r#"{ "extends": "../configs/base" }"#);
    tree.add_file("shared/util.ts", "");
    tree.add_file("app/main.ts", "");

    let project = resolve_project(&config).unwrap().unwrap();

    assert_eq!(project.files(), &[tree.join("shared/util.ts")]);
}

// =============================================================================
// Loading
// =============================================================================

#[test]
fn comments_and_trailing_commas_are_accepted() {
    let tree = TestTree::new();
    let config = tree.add_file(
        "tsconfig.json",
        concat!(
            "{\n  // strict mode\n",
            "  \"compilerOptions\": { \"noEmit\": true, },\n",
            "  /* files */\n  \"include\": [\"src\",],\n}\n",
        ),
    );

    let loaded = load_tsconfig(&config).unwrap();

    assert!(loaded.no_emit());
    assert_eq!(loaded.include.unwrap().entries, vec!["src".to_string()]);
}

#[test]
fn extends_resolves_packages_from_node_modules() {
    let tree = TestTree::new();
    tree.add_file(
        "node_modules/@acme/tsconfig/tsconfig.json",
        r#"{ "compilerOptions": { "noEmit": true, "strict": true } }"#,
    );
    let config = tree.add_file(
        "tsconfig.json",
        r#"{ "extends": "@acme/tsconfig", "compilerOptions": { "strict": false } }"#,
    );

    let loaded = load_tsconfig(&config).unwrap();

    assert!(loaded.no_emit());
    assert_eq!(loaded.compiler_options["strict"], serde_json::Value::Bool(false));
}

#[test]
fn missing_extends_target_is_an_error() {
    let tree = TestTree::new();
    let config = tree.add_file("tsconfig.json", r#"{ "extends": "./nope.json" }"#);

    let err = load_tsconfig(&config).unwrap_err();
    assert!(matches!(err, ConfigError::ExtendsNotFound { .. }));
}

#[test]
fn circular_extends_is_an_error() {
    let tree = TestTree::new();
    tree.add_file("a.json", r#"{ "extends": "./b.json" }"#);
    tree.add_file("b.json", r#"{ "extends": "./a.json" }"#);
    let config = tree.add_file("tsconfig.json", r#"{ "extends": "./a.json" }"#);

    let err = load_tsconfig(&config).unwrap_err();
    assert!(matches!(err, ConfigError::Circular(_)));
}

#[test]
fn malformed_config_is_an_error() {
    let tree = TestTree::new();
    let config = tree.add_file("tsconfig.json", r#"{ "include": ["src" }"#);

    let err = resolve_project(&config).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
}
