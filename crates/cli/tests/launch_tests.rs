//! Startup and fault reporting, through the library and the `ppcheck` binary.

use std::fs;
use std::path::Path;
use std::process::{Command, Output, Stdio};

use ppcheck_cli::launch::{load_manifest, report_fault, FAULT_PREFIX};
use ppcheck_core::error::Error;
use tempfile::TempDir;

fn run_ppcheck(project: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_ppcheck"))
        .arg(project)
        .env_remove("RUST_LOG")
        .stdin(Stdio::null())
        .output()
        .unwrap()
}

fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn test_missing_manifest_is_reported_and_empty() {
    let project = TempDir::new().unwrap();
    let mut out = Vec::new();

    let manifest = load_manifest(project.path(), &mut out).unwrap();

    let expected = format!(
        "ERROR: {} does not exist.\n",
        project.path().join("pyproject.toml").display()
    );
    assert_eq!(String::from_utf8(out).unwrap(), expected);
    assert!(manifest.scripts().is_empty());
    assert_eq!(manifest.directory(), project.path());
}

#[test]
fn test_existing_manifest_prints_nothing() {
    let project = TempDir::new().unwrap();
    fs::write(
        project.path().join("pyproject.toml"),
        "[tool.poetry.scripts]\nbuild = \"demo:build\"\n",
    )
    .unwrap();
    let mut out = Vec::new();

    let manifest = load_manifest(project.path(), &mut out).unwrap();

    assert!(out.is_empty());
    assert_eq!(manifest.scripts().len(), 1);
}

#[test]
fn test_malformed_manifest_reaches_fault_report() {
    let project = TempDir::new().unwrap();
    fs::write(project.path().join("pyproject.toml"), "[tool.poetry\n").unwrap();
    let mut out = Vec::new();

    let error = load_manifest(project.path(), &mut out).unwrap_err();

    assert!(matches!(error, Error::Toml { .. }));
    assert!(out.is_empty());
    let report = report_fault(&error);
    assert!(report.starts_with(&format!("{FAULT_PREFIX} ")));
    assert!(report.contains("pyproject.toml"));
}

#[test]
fn test_binary_malformed_manifest_warns_and_exits_zero() {
    let project = TempDir::new().unwrap();
    fs::write(project.path().join("pyproject.toml"), "[tool.poetry\n").unwrap();

    let output = run_ppcheck(project.path());

    assert_eq!(output.status.code(), Some(0));
    let lines = stdout_lines(&output);
    let warnings: Vec<&String> = lines
        .iter()
        .filter(|l| l.starts_with(FAULT_PREFIX))
        .collect();
    assert_eq!(warnings.len(), 1);
    assert_eq!(lines.last(), warnings.first().copied());
}

#[test]
fn test_binary_missing_manifest_continues_session() {
    let project = TempDir::new().unwrap();

    let output = run_ppcheck(project.path());

    assert_eq!(output.status.code(), Some(0));
    let lines = stdout_lines(&output);
    let expected = format!(
        "ERROR: {} does not exist.",
        project.path().join("pyproject.toml").display()
    );
    assert_eq!(lines.first(), Some(&expected));
    // The overview is still printed before the first prompt, which fails
    // without a terminal and ends at the fault report.
    assert!(lines.iter().any(|l| l.contains("PPCHECK")));
    assert!(lines.last().is_some_and(|l| l.starts_with(FAULT_PREFIX)));
}

#[test]
fn test_binary_rejects_missing_project_path() {
    let project = TempDir::new().unwrap();

    let output = run_ppcheck(&project.path().join("missing"));

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("does not exist"));
}
