//! Integration tests for the summary command and general CLI surface

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use crate::helpers::{load_fixture, run_aex};

fn aex() -> Command {
    Command::cargo_bin("aex").unwrap()
}

// ============================================================================
// Summary Command Tests
// ============================================================================

#[test]
fn summary_of_missing_target_reports_zero_events() {
    let dir = TempDir::new().unwrap();
    let target = dir.path().join("absent.json");

    aex()
        .args(["summary", target.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total events: 0"));
}

#[test]
fn summary_after_extract_lists_event_names() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("abi.json");
    std::fs::write(&source, load_fixture("erc20_abi.json")).unwrap();
    let target = dir.path().join("lista.json");

    run_aex(&[
        "extract",
        source.to_str().unwrap(),
        target.to_str().unwrap(),
    ]);

    aex()
        .args(["summary", target.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total events: 1"))
        .stdout(predicate::str::contains("Unique signatures: 1"))
        .stdout(predicate::str::contains("1. Transfer"));
}

#[test]
fn summary_of_corrupt_target_fails() {
    let dir = TempDir::new().unwrap();
    let target = dir.path().join("broken.json");
    std::fs::write(&target, "{ not json").unwrap();

    aex()
        .args(["summary", target.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid JSON in target file"));
}

// ============================================================================
// General CLI Surface Tests
// ============================================================================

#[test]
fn version_flag_shows_package_version() {
    aex()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn completions_generate_a_bash_script() {
    aex()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("aex"));
}

#[test]
fn unknown_subcommand_exits_2() {
    let (_stdout, _stderr, exit_code) = run_aex(&["frobnicate"]);
    assert_eq!(exit_code, 2);
}
