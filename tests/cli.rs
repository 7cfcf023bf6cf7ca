use assert_cmd::Command;
use predicates::str::contains;
use std::fs;
use std::path::PathBuf;

/// Helper to get a temporary home directory
fn temp_home_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("create temp dir")
}

/// Helper to get the preference file path in the temp dir
fn preference_file_path(dir: &tempfile::TempDir) -> PathBuf {
    dir.path().join(".cryptodash").join("preferences.json")
}

const BINARY_NAME: &str = "cryptodash";

#[test]
/// Help command should display usage information.
fn cli_help_displays_usage() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(contains("Live cryptocurrency prices"))
        .stdout(contains("snapshot"));
}

#[test]
/// Without a saved preference the theme is dark and nothing is written.
fn theme_defaults_to_dark() {
    let tmp = temp_home_dir();
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("theme")
        .env("HOME", tmp.path()) // simulate different $HOME
        .assert()
        .success()
        .stdout(contains("dark"));

    assert!(!preference_file_path(&tmp).exists());
}

#[test]
/// Toggling persists the new theme for the next run.
fn theme_toggle_persists_preference() {
    let tmp = temp_home_dir();
    let preference_path = preference_file_path(&tmp);

    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("theme")
        .arg("--toggle")
        .env("HOME", tmp.path())
        .assert()
        .success()
        .stdout(contains("light"));

    let saved = fs::read_to_string(&preference_path).unwrap();
    assert!(saved.contains("\"theme\""));
    assert!(saved.contains("light"));

    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("theme")
        .env("HOME", tmp.path())
        .assert()
        .success()
        .stdout(contains("light"));
}

#[test]
/// A corrupt preference file falls back to dark instead of failing.
fn theme_survives_corrupt_preference_file() {
    let tmp = temp_home_dir();
    let preference_path = preference_file_path(&tmp);
    fs::create_dir_all(preference_path.parent().unwrap()).unwrap();
    fs::write(&preference_path, "{ not json").unwrap();

    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("theme")
        .env("HOME", tmp.path())
        .assert()
        .success()
        .stdout(contains("dark"));
}

#[test]
/// Snapshot reports an unreachable price index and exits non-zero.
fn snapshot_reports_unreachable_index() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("snapshot")
        .arg("--api-url")
        .arg("http://127.0.0.1:9/v2")
        .assert()
        .failure()
        .stderr(contains("Failed to fetch assets"));
}

#[test]
/// A zero row limit is rejected before anything is fetched.
fn zero_limit_is_rejected() {
    for command in ["start", "snapshot"] {
        let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
        cmd.arg(command)
            .arg("--limit")
            .arg("0")
            .assert()
            .failure()
            .stderr(contains("limit must be at least 1"));
    }
}
