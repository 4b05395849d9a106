use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn grader() -> Command {
    Command::cargo_bin("dictation-grader").unwrap()
}

#[test]
fn grades_inline_texts() {
    grader()
        .args(["--reference", "the quick brown fox", "--submission", "the quick fox"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Score: 75.00%"))
        .stdout(predicate::str::contains("the quick (brown) fox"));
}

#[test]
fn emits_json_report() {
    let output = grader()
        .args(["--reference", "a b c", "--submission", "a x c", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let statuses: Vec<&str> = report["alignment"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["status"].as_str().unwrap())
        .collect();
    assert_eq!(statuses, ["correct", "incorrect", "missing", "correct"]);
}

#[test]
fn reads_texts_from_files() {
    let dir = tempdir().unwrap();
    let reference = dir.path().join("reference.txt");
    let submission = dir.path().join("submission.txt");
    fs::write(&reference, "One two\nthree\n").unwrap();
    fs::write(&submission, "one TWO three").unwrap();

    grader()
        .arg("--reference-file")
        .arg(&reference)
        .arg("--submission-file")
        .arg(&submission)
        .assert()
        .success()
        .stdout(predicate::str::contains("Score: 100.00%"));
}

#[test]
fn byte_order_mark_in_reference_file_is_ignored() {
    let dir = tempdir().unwrap();
    let reference = dir.path().join("reference.txt");
    fs::write(&reference, "\u{feff}One two three\n").unwrap();

    grader()
        .arg("--reference-file")
        .arg(&reference)
        .args(["--submission", "one two three"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Score: 100.00%"))
        .stdout(predicate::str::contains("one two three\n"));
}

#[test]
fn grades_exercise_record() {
    let dir = tempdir().unwrap();
    let exercise = dir.path().join("exercise.json");
    fs::write(
        &exercise,
        r#"{"id": 12, "folder": "lesson-3", "answerKey": "one two three", "submission": "one three"}"#,
    )
    .unwrap();

    grader()
        .arg("--exercise")
        .arg(&exercise)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exercise: lesson-3 #12"))
        .stdout(predicate::str::contains("Score: 66.67%"));
}

#[test]
fn lcs_strategy_from_config_file() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("grader.json");
    fs::write(&config, r#"{"strategy": "lcs"}"#).unwrap();

    grader()
        .args(["--reference", "a b c d e f", "--submission", "a f"])
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("Score: 33.33%"));
}

#[test]
fn empty_reference_fails() {
    grader()
        .args(["--reference", "   ", "--submission", "hi"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("reference text contains no words"));
}

#[test]
fn missing_reference_file_fails() {
    grader()
        .args(["--reference-file", "/nonexistent/reference.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read reference file"));
}

#[test]
fn malformed_config_reports_its_cause() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("grader.json");
    fs::write(&config, "strategy = lcs").unwrap();

    grader()
        .args(["--reference", "a b", "--submission", "a b"])
        .arg("--config")
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse grader config"))
        .stderr(predicate::str::contains("expected value"));
}

#[test]
fn zero_lookahead_is_rejected_with_context() {
    grader()
        .args(["--reference", "a b", "--submission", "a b", "--lookahead", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to build grader configuration"))
        .stderr(predicate::str::contains("lookahead window must be at least 1"));
}
