//! Corruption recovery tests for the nutri binary.
//!
//! These tests verify the system can handle:
//! - Corrupted session files
//! - Corrupted history files
//! - Missing data directories

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn cli() -> Command {
    Command::cargo_bin("nutri").expect("Failed to find nutri binary")
}

fn setup_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

#[test]
fn test_corrupted_session_file_starts_fresh() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path().to_path_buf();

    fs::write(data_dir.join("session.json"), "{ invalid json }}}}")
        .expect("Failed to write corrupted session");

    cli()
        .arg("show")
        .arg("--data-dir")
        .arg(&data_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("(empty)"));

    // Adding replaces the corrupted file with a valid session
    cli()
        .args(["add", "apple"])
        .arg("--data-dir")
        .arg(&data_dir)
        .assert()
        .success();

    let contents = fs::read_to_string(data_dir.join("session.json")).unwrap();
    let session: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(session["entries"].as_array().unwrap().len(), 1);
}

#[test]
fn test_partially_written_session_file() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path().to_path_buf();

    fs::write(
        data_dir.join("session.json"),
        r#"{"entries":[{"name":"Dal","quantity":1.0,"unit":"serving","calo"#,
    )
    .unwrap();

    cli()
        .arg("show")
        .arg("--data-dir")
        .arg(&data_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Health score: 90"));
}

#[test]
fn test_session_without_goal_uses_default() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path().to_path_buf();

    fs::write(data_dir.join("session.json"), r#"{"entries":[]}"#).unwrap();

    cli()
        .arg("show")
        .arg("--data-dir")
        .arg(&data_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("goal 2000 kcal"));
}

#[test]
fn test_corrupted_history_is_reported() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path().to_path_buf();

    fs::write(data_dir.join("history.json"), "[{ broken").unwrap();

    cli()
        .arg("history")
        .arg("--data-dir")
        .arg(&data_dir)
        .assert()
        .failure()
        .stderr(predicate::str::contains("JSON error"));

    // The corrupted history is left untouched for manual recovery
    cli()
        .args(["add", "dal"])
        .arg("--data-dir")
        .arg(&data_dir)
        .assert()
        .success();
    cli()
        .arg("save")
        .arg("--data-dir")
        .arg(&data_dir)
        .assert()
        .failure();

    let contents = fs::read_to_string(data_dir.join("history.json")).unwrap();
    assert_eq!(contents, "[{ broken");
}

#[test]
fn test_missing_data_dir_is_created_on_write() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path().join("nested").join("data");

    cli()
        .args(["add", "orange"])
        .arg("--data-dir")
        .arg(&data_dir)
        .assert()
        .success();

    assert!(data_dir.join("session.json").exists());
}
