//! Concurrency tests for the elitefit binary.
//!
//! These tests verify that multiple processes can safely:
//! - Append to the activity log simultaneously (file locking)
//! - Update the profile store without losing writes

use assert_cmd::Command;
use std::thread;
use tempfile::TempDir;

fn cli() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("elitefit"))
}

fn setup_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

#[test]
fn test_concurrent_activity_logging() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path().to_path_buf();

    // Append from several processes at once
    let handles: Vec<_> = (0..5)
        .map(|i| {
            let data_dir = data_dir.clone();
            thread::spawn(move || {
                cli()
                    .arg("--data-dir")
                    .arg(&data_dir)
                    .args(["log", "add", "--name", &format!("Set {}", i)])
                    .assert()
                    .success();
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    // Verify all entries were appended intact
    let log_content =
        std::fs::read_to_string(data_dir.join("activities.log")).expect("Failed to read log");
    let entry_count = log_content.lines().filter(|l| !l.trim().is_empty()).count();
    assert_eq!(entry_count, 5, "Expected 5 entries, got {}", entry_count);

    // Every line parses as JSON
    for line in log_content.lines().filter(|l| !l.trim().is_empty()) {
        serde_json::from_str::<serde_json::Value>(line).expect("log line should be valid JSON");
    }
}

#[test]
fn test_sequential_profile_updates_preserve_fields() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path().to_path_buf();

    cli()
        .arg("--data-dir")
        .arg(&data_dir)
        .args(["profile", "set", "--name", "Alex Carter"])
        .assert()
        .success();

    cli()
        .arg("--data-dir")
        .arg(&data_dir)
        .args(["profile", "set", "--email", "alex@example.com"])
        .assert()
        .success();

    // Both writes survive: updates are load-modify-save
    let content =
        std::fs::read_to_string(data_dir.join("user.json")).expect("Failed to read profile");
    assert!(content.contains("Alex Carter"));
    assert!(content.contains("alex@example.com"));
}

#[test]
fn test_reads_during_writes() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path().to_path_buf();

    cli()
        .arg("--data-dir")
        .arg(&data_dir)
        .args(["log", "add", "--name", "Warmup"])
        .assert()
        .success();

    // Interleave readers and writers
    for i in 0..3 {
        cli()
            .arg("--data-dir")
            .arg(&data_dir)
            .args(["log", "add", "--name", &format!("Round {}", i)])
            .assert()
            .success();

        cli()
            .arg("--data-dir")
            .arg(&data_dir)
            .args(["log", "list"])
            .assert()
            .success();
    }
}
