//! Integration tests for ppcheck-core
//!
//! These tests verify that the core functionality works together correctly
//! by testing complete workflows end-to-end.

use std::env;
use std::fs;

use ppcheck_core::{
    command_definitions::available_maintenance_commands,
    config::{Settings, DEV_DEPENDENCY_SECTIONS, PROD_DEPENDENCY_SECTIONS},
    dependencies::{pair_dependency_columns, GridLayout},
    error::Error,
    execution::{run_command, CommandInvocation, ExitPolicy, OutputMode},
    manifest::Manifest,
    project_info::render_project_info,
};
use serial_test::serial;
use tempfile::TempDir;

const POETRY_MANIFEST: &str = r#"
[tool.poetry]
name = "weather-station"
version = "1.4.2"
description = "Collects and publishes readings from backyard weather stations"
authors = ["Dana Example <dana@example.com>"]
packages = [{ include = "weather_station", from = "src" }]

[tool.poetry.dependencies]
python = "^3.11"
httpx = "^0.27"
pydantic = { version = "^2.6", extras = ["email"] }

[tool.poetry.group.dev.dependencies]
ruff = "^0.3"

[tool.poetry.group.test.dependencies]
pytest = "^8.0"
pytest-cov = "^5.0"

[tool.poetry.scripts]
collect = "weather_station.cli:collect"
publish = "weather_station.cli:publish"
"#;

fn write_project(manifest: &str) -> TempDir {
    let project = TempDir::new().unwrap();
    fs::write(project.path().join("pyproject.toml"), manifest).unwrap();
    project
}

/// Test loading a complete manifest and deriving its views
#[test]
fn test_complete_manifest_workflow() {
    let project = write_project(POETRY_MANIFEST);
    let manifest = Manifest::load(project.path()).unwrap();

    assert_eq!(manifest.directory(), project.path());

    let scripts = manifest.scripts();
    assert_eq!(
        scripts.keys().collect::<Vec<_>>(),
        vec!["collect", "publish"]
    );

    let prod = manifest.dependencies(&PROD_DEPENDENCY_SECTIONS);
    let dev = manifest.dependencies(&DEV_DEPENDENCY_SECTIONS);
    assert_eq!(prod.len(), 3);
    assert_eq!(prod[2].constraint, "^2.6");
    assert_eq!(
        dev.iter().map(|d| d.name.as_str()).collect::<Vec<_>>(),
        vec!["ruff", "pytest", "pytest-cov"]
    );

    let grid = pair_dependency_columns(&prod, &dev).unwrap();
    assert_eq!(grid.layout, GridLayout::Paired);
    assert_eq!(grid.rows.len(), 3);

    let rendered = render_project_info(&manifest, &Settings::default());
    assert!(rendered.contains("weather-station"));
    assert!(rendered.contains("weather_station"));
    assert!(rendered.contains("pytest-cov"));
}

/// A manifest with scripts but no dependency sections shows no dependency grid
#[test]
fn test_manifest_without_dependencies() {
    let project = write_project("[tool.poetry.scripts]\nbuild = \"demo:build\"\n");
    let manifest = Manifest::load(project.path()).unwrap();

    assert_eq!(manifest.scripts().len(), 1);
    assert!(pair_dependency_columns(
        &manifest.dependencies(&PROD_DEPENDENCY_SECTIONS),
        &manifest.dependencies(&DEV_DEPENDENCY_SECTIONS),
    )
    .is_none());

    let rendered = render_project_info(&manifest, &Settings::default());
    assert!(!rendered.contains("dependencies"));
}

#[test]
fn test_missing_manifest() {
    let project = TempDir::new().unwrap();
    let result = Manifest::load(project.path());

    match result {
        Err(Error::ManifestNotFound { path }) => assert!(path.ends_with("pyproject.toml")),
        other => panic!("Expected missing manifest, got {other:?}"),
    }
}

#[test]
fn test_malformed_manifest() {
    let project = write_project("[tool.poetry\n");
    assert!(matches!(
        Manifest::load(project.path()),
        Err(Error::Toml { .. })
    ));
}

#[test]
fn test_maintenance_commands_follow_tests_directory() {
    let project = write_project(POETRY_MANIFEST);
    assert_eq!(available_maintenance_commands(project.path(), "tests").len(), 4);

    fs::create_dir(project.path().join("tests")).unwrap();
    assert_eq!(available_maintenance_commands(project.path(), "tests").len(), 5);
}

/// Commands run in the manifest directory and leave the working directory alone
#[cfg(unix)]
#[test]
#[serial]
fn test_run_in_manifest_directory() {
    let project = write_project(POETRY_MANIFEST);
    let manifest = Manifest::load(project.path()).unwrap();
    let before = env::current_dir().unwrap();

    let invocation = CommandInvocation::new("ls pyproject.toml", manifest.directory());
    let report = run_command(&invocation, OutputMode::Capture, ExitPolicy::Permissive).unwrap();
    assert_eq!(report.output.as_deref().map(str::trim), Some("pyproject.toml"));
    assert_eq!(env::current_dir().unwrap(), before);

    let failing = CommandInvocation::new("ls missing-file", manifest.directory());
    let report = run_command(&failing, OutputMode::Capture, ExitPolicy::Permissive).unwrap();
    assert!(!report.success());
    assert_eq!(env::current_dir().unwrap(), before);
}
