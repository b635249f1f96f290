//! End-to-end tests for the transcriptor binary.

#![cfg(feature = "cli")]

use assert_cmd::Command;
use predicates::prelude::*;

const SESSION: &str = "# Quick question\n\
    _Claude Code session from 1/1/2025_\n\
    \n\
    ---\n\
    \n\
    **User**\n\
    hello\n\
    \n\
    ---\n\
    \n\
    **Assistant**\n\
    hi there\n";

fn write_session(dir: &tempfile::TempDir) -> std::path::PathBuf {
    let path = dir.path().join("session.md");
    std::fs::write(&path, SESSION).unwrap();
    path
}

#[test]
fn parses_to_stdout_as_json() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_session(&dir);

    let mut cmd = Command::cargo_bin("transcriptor").unwrap();
    cmd.arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""role": "user""#))
        .stdout(predicate::str::contains(r#""content": "hello""#))
        .stderr(predicate::str::contains("Claude Code"))
        .stderr(predicate::str::contains("Parsed 2 messages"));
}

#[test]
fn writes_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_session(&dir);
    let output = dir.path().join("messages.json");

    let mut cmd = Command::cargo_bin("transcriptor").unwrap();
    cmd.arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .success()
        .stderr(predicate::str::contains("Output saved"));

    let content = std::fs::read_to_string(&output).unwrap();
    let messages: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(messages.as_array().unwrap().len(), 2);
}

#[test]
fn jsonl_format_emits_one_line_per_message() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_session(&dir);

    let mut cmd = Command::cargo_bin("transcriptor").unwrap();
    let assert = cmd
        .arg(&input)
        .arg("--format")
        .arg("jsonl")
        .arg("--quiet")
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let lines: Vec<&str> = stdout.lines().filter(|l| !l.is_empty()).collect();
    assert_eq!(lines.len(), 2);
    for line in lines {
        let msg: serde_json::Value = serde_json::from_str(line).unwrap();
        assert!(msg.get("role").is_some());
    }
}

#[test]
fn quiet_suppresses_summary() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_session(&dir);

    let mut cmd = Command::cargo_bin("transcriptor").unwrap();
    cmd.arg(&input)
        .arg("--quiet")
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn forced_source_overrides_detection() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("chat.txt");
    // No signature; the generic tokenizer would claim this, but --source
    // picks the Claude.ai tokenizer explicitly.
    std::fs::write(&path, "Human: ping\nAssistant: pong\n").unwrap();

    let mut cmd = Command::cargo_bin("transcriptor").unwrap();
    cmd.arg(&path)
        .arg("--source")
        .arg("claude-ai")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""source": "claude-ai""#))
        .stderr(predicate::str::contains("Claude.ai"));
}

#[test]
fn missing_input_fails_with_error() {
    let mut cmd = Command::cargo_bin("transcriptor").unwrap();
    cmd.arg("/definitely/not/here.md")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn rejects_unknown_source_value() {
    let mut cmd = Command::cargo_bin("transcriptor").unwrap();
    cmd.arg("whatever.md")
        .arg("--source")
        .arg("copilot")
        .assert()
        .failure();
}

#[test]
fn empty_file_produces_empty_array() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.md");
    std::fs::write(&path, "").unwrap();

    let mut cmd = Command::cargo_bin("transcriptor").unwrap();
    cmd.arg(&path)
        .arg("--quiet")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("[]"));
}
