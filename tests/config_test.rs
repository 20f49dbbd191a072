//! Integration tests for Settings loading from a local config file.
//!
//! These tests run without BINTREE_* variables; env overrides are covered in
//! config_env_test.rs, which runs in its own process.

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use bintree::cli::CliError;
use bintree::config::Settings;
use bintree::samples::Sample;
use bintree::TraversalOrder;

#[test]
fn given_local_config_when_load_then_overrides_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bintree.toml");
    fs::write(
        &path,
        r#"
indent_width = 4
traversal = "post-order"
"#,
    )
    .unwrap();

    let settings = Settings::load(Some(&path)).expect("load settings");

    assert_eq!(settings.indent_width, 4);
    assert_eq!(settings.traversal, TraversalOrder::PostOrder);
    assert_eq!(settings.sample, Sample::Numbers, "unspecified keeps default");
}

#[test]
fn given_missing_local_config_when_load_then_returns_config_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("does-not-exist.toml");

    let result = Settings::load(Some(&path));

    assert!(matches!(result, Err(CliError::Config { .. })));
}

#[test]
fn given_invalid_value_when_load_then_returns_config_error_naming_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.toml");
    fs::write(&path, r#"traversal = "sideways""#).unwrap();

    let err = Settings::load(Some(&path)).unwrap_err();

    assert!(err.to_string().contains("bad.toml"), "got: {}", err);
}

#[test]
fn given_effective_settings_when_rendered_then_round_trips_through_local_config() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bintree.toml");
    let settings = Settings {
        indent_width: 3,
        traversal: TraversalOrder::ReverseBreadthFirst,
        sample: Sample::Ancestors,
    };
    fs::write(&path, settings.to_toml().unwrap()).unwrap();

    let loaded = Settings::load(Some(Path::new(&path))).unwrap();

    assert_eq!(loaded, settings);
}
