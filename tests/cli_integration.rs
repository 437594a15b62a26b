//! CLI integration tests for taskplan
//!
//! These tests exercise the full pipeline through the binary: reading a
//! request file, computing an order, and reporting errors with a nonzero
//! exit status.

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Get a command instance for the taskplan binary
fn taskplan_cmd() -> assert_cmd::Command {
    assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("taskplan"))
}

/// Write a request JSON document into a temp dir and return its path
fn write_request(dir: &TempDir, json: &str) -> std::path::PathBuf {
    let path = dir.path().join("request.json");
    fs::write(&path, json).unwrap();
    path
}

const SCENARIO: &str = r#"{
    "tasks": [
        {"title": "B", "dueDate": "2024-01-01T00:00:00Z", "estimatedHours": 3},
        {"title": "A", "dueDate": "2024-01-02T00:00:00Z", "estimatedHours": 5},
        {"title": "C", "dependencies": ["A", "B"]}
    ]
}"#;

// =============================================================================
// Schedule Tests
// =============================================================================

#[test]
fn test_schedule_prints_execution_order() {
    let dir = TempDir::new().unwrap();
    let path = write_request(&dir, SCENARIO);

    taskplan_cmd()
        .arg("schedule")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Execution order (3 tasks):"))
        .stdout(predicate::str::contains("1. B"))
        .stdout(predicate::str::contains("2. A"))
        .stdout(predicate::str::contains("3. C"));
}

#[test]
fn test_schedule_json_format() {
    let dir = TempDir::new().unwrap();
    let path = write_request(&dir, SCENARIO);

    let output = taskplan_cmd()
        .args(["schedule", "--format", "json"])
        .arg(&path)
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();

    assert_eq!(json["count"], 3);
    assert_eq!(json["order"][0], "B");
    assert_eq!(json["order"][1], "A");
    assert_eq!(json["order"][2], "C");
}

#[test]
fn test_schedule_reads_stdin() {
    taskplan_cmd()
        .arg("schedule")
        .write_stdin(SCENARIO)
        .assert()
        .success()
        .stdout(predicate::str::contains("1. B"));
}

#[test]
fn test_schedule_empty_request() {
    let dir = TempDir::new().unwrap();
    let path = write_request(&dir, r#"{"tasks": []}"#);

    taskplan_cmd()
        .arg("schedule")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing to schedule."));
}

// =============================================================================
// Error Reporting Tests
// =============================================================================

#[test]
fn test_duplicate_titles_fail() {
    let dir = TempDir::new().unwrap();
    let path = write_request(
        &dir,
        r#"{"tasks": [{"title": "Task1"}, {"title": "task1"}]}"#,
    );

    taskplan_cmd()
        .arg("schedule")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("duplicate task title: 'task1'"));
}

#[test]
fn test_unknown_dependency_fails() {
    let dir = TempDir::new().unwrap();
    let path = write_request(
        &dir,
        r#"{"tasks": [{"title": "Build", "dependencies": ["Z"]}]}"#,
    );

    taskplan_cmd()
        .arg("schedule")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "task 'Build' depends on unknown task 'Z'",
        ));
}

#[test]
fn test_cycle_lists_all_members() {
    let dir = TempDir::new().unwrap();
    let path = write_request(
        &dir,
        r#"{"tasks": [
            {"title": "X", "dependencies": ["Y"]},
            {"title": "Y", "dependencies": ["X"]}
        ]}"#,
    );

    taskplan_cmd()
        .arg("schedule")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("cycle detected"))
        .stderr(predicate::str::contains("X"))
        .stderr(predicate::str::contains("Y"));
}

#[test]
fn test_malformed_json_fails() {
    let dir = TempDir::new().unwrap();
    let path = write_request(&dir, "not json at all");

    taskplan_cmd()
        .arg("schedule")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse schedule request"));
}

#[test]
fn test_missing_file_fails() {
    taskplan_cmd()
        .arg("schedule")
        .arg("no-such-file.json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read file"));
}

// =============================================================================
// Check Tests
// =============================================================================

#[test]
fn test_check_valid_request() {
    let dir = TempDir::new().unwrap();
    let path = write_request(&dir, SCENARIO);

    taskplan_cmd()
        .arg("check")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Request is valid: 3 tasks, 2 dependencies",
        ));
}

#[test]
fn test_check_rejects_cycle() {
    let dir = TempDir::new().unwrap();
    let path = write_request(
        &dir,
        r#"{"tasks": [{"title": "Loop", "dependencies": ["Loop"]}]}"#,
    );

    taskplan_cmd()
        .arg("check")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("cycle detected"));
}

#[test]
fn test_check_json_format() {
    let dir = TempDir::new().unwrap();
    let path = write_request(&dir, SCENARIO);

    let output = taskplan_cmd()
        .args(["check", "--format", "json"])
        .arg(&path)
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["success"], true);
}
