//! End-to-end CLI tests for the faa-charts binary.
//!
//! Only paths that stop before any network request are exercised here.

// `Command::cargo_bin` is deprecated in assert_cmd >=2.0.17 in favor of
// `cargo::cargo_bin_cmd!` macro. Suppressed until migration to the new API.
#![allow(deprecated)]

use assert_cmd::Command;
use faa_charts::DOWNLOAD_PATH_ENV_VAR;
use predicates::prelude::*;
use tempfile::TempDir;

fn faa_charts() -> Command {
    let mut cmd = Command::cargo_bin("faa-charts").unwrap();
    cmd.env_remove(DOWNLOAD_PATH_ENV_VAR).env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_cli_help_describes_tool() {
    faa_charts()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("FAA airport charts"));
}

#[test]
fn test_cli_missing_download_path_reports_and_exits() {
    faa_charts()
        .arg("KORD")
        .assert()
        .success()
        .stderr(predicate::str::contains(format!(
            "Environment variable '{DOWNLOAD_PATH_ENV_VAR}' missing"
        )))
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_cli_nonexistent_download_path_reports_and_exits() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("does-not-exist");

    faa_charts()
        .env(DOWNLOAD_PATH_ENV_VAR, &missing)
        .arg("KORD")
        .assert()
        .success()
        .stderr(predicate::str::contains("doesn't exist"));
}

#[test]
fn test_cli_invalid_airport_identifier_reports_and_exits() {
    let temp_dir = TempDir::new().unwrap();

    faa_charts()
        .env(DOWNLOAD_PATH_ENV_VAR, temp_dir.path())
        .arg("CHICAGO")
        .assert()
        .success()
        .stderr(predicate::str::contains("Airport identifier invalid"));

    assert_eq!(std::fs::read_dir(temp_dir.path()).unwrap().count(), 0);
}

#[test]
fn test_cli_prompts_for_identifier_when_absent() {
    let temp_dir = TempDir::new().unwrap();

    faa_charts()
        .env(DOWNLOAD_PATH_ENV_VAR, temp_dir.path())
        .write_stdin("no\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Enter airport identifier: "))
        .stderr(predicate::str::contains("Airport identifier invalid"));
}

#[test]
fn test_cli_list_conflicts_with_select() {
    faa_charts()
        .args(["KORD", "--list", "--select", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}
