//! Integration tests for the extract command (CLI)

use std::fs;

use serde_json::Value;
use tempfile::TempDir;

use crate::helpers::{load_fixture, run_aex};

fn write_file(dir: &TempDir, name: &str, content: &str) -> String {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path.to_str().unwrap().to_string()
}

// ============================================================================
// Help Output Tests
// ============================================================================

#[test]
fn extract_help_exits_0_and_shows_usage() {
    let (stdout, _stderr, exit_code) = run_aex(&["extract", "--help"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("Extract ABI events"));
    assert!(stdout.contains("<ABI_FILE>"));
    assert!(stdout.contains("<TARGET_FILE>"));
    assert!(stdout.contains("--force"));
}

// ============================================================================
// Error Handling Tests
// ============================================================================

#[test]
fn extract_no_arguments_shows_error() {
    let (_stdout, stderr, exit_code) = run_aex(&["extract"]);

    assert_eq!(exit_code, 2);
    assert!(stderr.contains("required arguments"));
    assert!(stderr.contains("<ABI_FILE>"));
}

#[test]
fn extract_nonexistent_source_exits_nonzero_with_helpful_error() {
    let dir = TempDir::new().unwrap();
    let target = dir.path().join("lista.json");

    let (_stdout, stderr, exit_code) = run_aex(&[
        "extract",
        "nonexistent.json",
        target.to_str().unwrap(),
    ]);

    assert_eq!(exit_code, 1);
    assert!(stderr.contains("nonexistent.json"));
    assert!(stderr.contains("failed to read ABI file"));
    assert!(!target.exists());
}

#[test]
fn extract_truncated_source_fails_with_decode_error() {
    let dir = TempDir::new().unwrap();
    let source = write_file(&dir, "abi.json", &load_fixture("truncated.json"));
    let target = dir.path().join("lista.json");

    let (_stdout, stderr, exit_code) = run_aex(&["extract", &source, target.to_str().unwrap()]);

    assert_eq!(exit_code, 1);
    assert!(stderr.contains("invalid JSON in ABI file"));
    // Target file left untouched
    assert!(!target.exists());
}

// ============================================================================
// Happy Path Tests
// ============================================================================

#[test]
fn extract_writes_target_and_prints_summary() {
    let dir = TempDir::new().unwrap();
    let source = write_file(&dir, "abi.json", &load_fixture("erc20_abi.json"));
    let target = dir.path().join("lista.json");

    let (stdout, _stderr, exit_code) = run_aex(&["extract", &source, target.to_str().unwrap()]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("Successfully processed events!"));
    assert!(stdout.contains("New events added: 1"));
    assert!(stdout.contains("Total events: 1"));
    assert!(stdout.contains("Unique signatures: 1"));
    assert!(stdout.contains("1. Transfer"));

    let document: Value = serde_json::from_str(&fs::read_to_string(&target).unwrap()).unwrap();
    assert_eq!(document["_id"], "lista");
    assert_eq!(document["event_abi"].as_array().unwrap().len(), 1);
    assert_eq!(document["event_abi"][0]["name"], "Transfer");
}

#[test]
fn extract_is_idempotent_across_runs() {
    let dir = TempDir::new().unwrap();
    let source = write_file(&dir, "abi.json", &load_fixture("erc20_abi.json"));
    let target = dir.path().join("lista.json");

    run_aex(&["extract", &source, target.to_str().unwrap()]);
    let (stdout, _stderr, exit_code) = run_aex(&["extract", &source, target.to_str().unwrap()]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("New events added: 0"));
    assert!(stdout.contains("Total events: 1"));
}

#[test]
fn extract_normalizes_adjacent_arrays() {
    let dir = TempDir::new().unwrap();
    let source = write_file(&dir, "abi.json", &load_fixture("adjacent_arrays.json"));
    let target = dir.path().join("lista.json");

    let (stdout, _stderr, exit_code) = run_aex(&["extract", &source, target.to_str().unwrap()]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("Total events: 2"));
    assert!(stdout.contains("Unique signatures: 2"));
    assert!(stdout.contains("1. Deposit"));
    assert!(stdout.contains("2. Withdraw"));
}

// ============================================================================
// Force Mode Tests
// ============================================================================

#[test]
fn force_replaces_while_merge_appends() {
    let dir = TempDir::new().unwrap();
    let three = write_file(
        &dir,
        "three.json",
        r#"[{"type":"event","name":"A","inputs":[]},
            {"type":"event","name":"B","inputs":[]},
            {"type":"event","name":"C","inputs":[]}]"#,
    );
    let two = write_file(
        &dir,
        "two.json",
        r#"[{"type":"event","name":"A","inputs":[]},
            {"type":"event","name":"B","inputs":[]}]"#,
    );
    let target = dir.path().join("lista.json");
    let target_str = target.to_str().unwrap();

    run_aex(&["extract", &three, target_str]);

    // Merge mode: nothing new, still 3
    let (stdout, _stderr, exit_code) = run_aex(&["extract", &two, target_str]);
    assert_eq!(exit_code, 0);
    assert!(stdout.contains("New events added: 0"));
    assert!(stdout.contains("Total events: 3"));

    // Force mode: total replacement with the 2 incoming events
    let (stdout, _stderr, exit_code) = run_aex(&["extract", &two, target_str, "--force"]);
    assert_eq!(exit_code, 0);
    assert!(stdout.contains("Events replaced: 2"));
    assert!(stdout.contains("Total events: 2"));
}
