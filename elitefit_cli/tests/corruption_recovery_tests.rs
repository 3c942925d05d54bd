//! Corruption recovery tests for the elitefit binary.
//!
//! These tests verify the system can handle:
//! - Corrupted profile and settings files
//! - Corrupted activity log lines
//! - Missing files

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::io::Write as IoWrite;
use tempfile::TempDir;

fn cli() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("elitefit"))
}

fn setup_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

#[test]
fn test_corrupted_profile_file() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path().to_path_buf();

    fs::create_dir_all(&data_dir).unwrap();
    fs::write(data_dir.join("user.json"), "{ invalid json }}}}")
        .expect("Failed to write corrupted profile");

    // Falls back to defaults instead of failing
    cli()
        .arg("--data-dir")
        .arg(&data_dir)
        .args(["profile", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(unset)"));
}

#[test]
fn test_corrupted_settings_file() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path().to_path_buf();

    fs::create_dir_all(&data_dir).unwrap();
    fs::write(data_dir.join("settings.json"), "not json at all")
        .expect("Failed to write corrupted settings");

    cli()
        .arg("--data-dir")
        .arg(&data_dir)
        .args(["profile", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Notifications: on"));
}

#[test]
fn test_corrupted_log_lines_ignored_during_read() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path().to_path_buf();

    // Log a valid entry first
    cli()
        .arg("--data-dir")
        .arg(&data_dir)
        .args(["log", "add", "--name", "Squats"])
        .assert()
        .success();

    // Append garbage lines to the log
    let mut file = fs::OpenOptions::new()
        .append(true)
        .open(data_dir.join("activities.log"))
        .unwrap();
    writeln!(file, "{{ invalid json }}").unwrap();
    writeln!(file, "{{ more invalid").unwrap();

    // Listing still works and shows the valid entry
    cli()
        .arg("--data-dir")
        .arg(&data_dir)
        .args(["log", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Squats"));
}

#[test]
fn test_corrupted_log_survives_rollup() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path().to_path_buf();

    cli()
        .arg("--data-dir")
        .arg(&data_dir)
        .args(["log", "add", "--name", "Deadlifts"])
        .assert()
        .success();

    let mut file = fs::OpenOptions::new()
        .append(true)
        .open(data_dir.join("activities.log"))
        .unwrap();
    writeln!(file, "{{ broken line").unwrap();

    // Rollup archives the parseable entry and does not crash
    cli()
        .arg("--data-dir")
        .arg(&data_dir)
        .arg("rollup")
        .assert()
        .success()
        .stdout(predicate::str::contains("Rolled up 1 activities"));

    assert!(data_dir.join("activities.csv").exists());
}

#[test]
fn test_status_with_no_data_at_all() {
    let temp_dir = setup_test_dir();

    cli()
        .arg("--data-dir")
        .arg(temp_dir.path())
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome back, Champion"));
}

#[test]
fn test_empty_log_file() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path().to_path_buf();

    fs::create_dir_all(&data_dir).unwrap();
    fs::File::create(data_dir.join("activities.log")).unwrap();

    cli()
        .arg("--data-dir")
        .arg(&data_dir)
        .args(["log", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No activities"));
}
