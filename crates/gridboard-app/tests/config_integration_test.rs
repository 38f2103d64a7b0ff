//! Integration tests for deployment configuration loading.
//!
//! These tests exercise `DashboardConfig::from_dir` against real files in a
//! temporary directory: missing files, partial overrides, and invalid input.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::fs;
use std::path::Path;

use gridboard_app::DashboardConfig;
use gridboard_core::{AUTO_REFRESH_INTERVAL_SECS, DEFAULT_DAG_RUN_DISPLAY_NUMBER};
use tempfile::TempDir;

/// Test helper: temporary directory acting as the deployment root.
fn setup_dir() -> TempDir {
    TempDir::with_prefix("gridboard-config-test-").expect("create temp dir")
}

/// Test helper: write `gridboard.toml` into the directory.
fn write_config(dir: &Path, contents: &str) {
    fs::write(dir.join("gridboard.toml"), contents).expect("write config file");
}

#[test]
fn missing_file_falls_back_to_defaults() {
    let dir = setup_dir();

    let config = DashboardConfig::from_dir(dir.path()).expect("load defaults");

    assert_eq!(config.webserver.auto_refresh_interval, AUTO_REFRESH_INTERVAL_SECS);
    assert_eq!(
        config.webserver.default_dag_run_display_number,
        DEFAULT_DAG_RUN_DISPLAY_NUMBER
    );
}

#[test]
fn file_overrides_display_settings() {
    let dir = setup_dir();
    write_config(
        dir.path(),
        r#"
[webserver]
auto_refresh_interval = 10
default_dag_run_display_number = 50
"#,
    );

    let config = DashboardConfig::from_dir(dir.path()).expect("load config");

    assert_eq!(config.webserver.auto_refresh_interval, 10);
    assert_eq!(config.webserver.default_dag_run_display_number, 50);
    assert_eq!(config.webserver.refresh_interval().as_secs(), 10);
}

#[test]
fn partial_file_keeps_remaining_defaults() {
    let dir = setup_dir();
    write_config(
        dir.path(),
        r#"
[webserver]
default_dag_run_display_number = 100
"#,
    );

    let config = DashboardConfig::from_dir(dir.path()).expect("load config");

    assert_eq!(config.webserver.auto_refresh_interval, AUTO_REFRESH_INTERVAL_SECS);
    assert_eq!(config.webserver.default_dag_run_display_number, 100);
}

#[test]
fn empty_file_means_all_defaults() {
    let dir = setup_dir();
    write_config(dir.path(), "");

    let config = DashboardConfig::from_dir(dir.path()).expect("load config");

    assert_eq!(config, DashboardConfig::default());
}

#[test]
fn parse_failure_names_the_file() {
    let dir = setup_dir();
    write_config(dir.path(), "[webserver\nauto_refresh_interval = 10");

    let err = DashboardConfig::from_dir(dir.path()).expect_err("expected parse failure");

    assert!(err.to_string().contains("gridboard.toml"));
}

#[test]
fn zero_refresh_interval_is_rejected() {
    let dir = setup_dir();
    write_config(
        dir.path(),
        r#"
[webserver]
auto_refresh_interval = 0
"#,
    );

    let err = DashboardConfig::from_dir(dir.path()).expect_err("expected validation failure");

    assert!(err.to_string().contains("auto_refresh_interval"));
}

#[test]
fn zero_display_number_is_rejected() {
    let dir = setup_dir();
    write_config(
        dir.path(),
        r#"
[webserver]
default_dag_run_display_number = 0
"#,
    );

    let err = DashboardConfig::from_dir(dir.path()).expect_err("expected validation failure");

    assert!(err.to_string().contains("default_dag_run_display_number"));
}
