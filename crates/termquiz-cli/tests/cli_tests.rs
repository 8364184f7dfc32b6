//! CLI integration tests using assert_cmd.

use std::collections::HashSet;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Runs the binary inside `dir` with the network check disabled and no
/// user-level config in reach.
fn termquiz(dir: &TempDir) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("termquiz").unwrap();
    cmd.current_dir(dir.path())
        .env("HOME", dir.path())
        .env("TERMQUIZ_NO_PROBE", "1")
        .env_remove("RUST_LOG");
    cmd
}

const FOUR_PAIRS: &str = "\
2+2{-tab-}4{-line_break-}\
3+3{-tab-}6{-line_break-}\
4+4{-tab-}8{-line_break-}\
5+5{-tab-}10{-line_break-}";

fn write_deck(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn help_lists_commands() {
    let dir = TempDir::new().unwrap();
    termquiz(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("run"))
        .stdout(predicate::str::contains("validate"))
        .stdout(predicate::str::contains("init"));
}

#[test]
fn version_flag() {
    let dir = TempDir::new().unwrap();
    termquiz(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("termquiz"));
}

#[test]
fn default_command_runs_builtin_deck() {
    let dir = TempDir::new().unwrap();
    termquiz(&dir)
        .write_stdin("1\n".repeat(10))
        .assert()
        .success()
        .stdout(predicate::str::contains("Question 1/10:"))
        .stdout(predicate::str::contains("Question 10/10:"))
        .stdout(predicate::str::contains("Enter the number of your answer:"))
        .stdout(predicate::str::contains("out of 10 correct"));
}

#[test]
fn count_is_clamped_to_deck_size_without_repeats() {
    let dir = TempDir::new().unwrap();
    let deck = write_deck(&dir, "four.txt", FOUR_PAIRS);

    let output = termquiz(&dir)
        .args(["run", "--count", "10", "--format", "json", "--seed", "7"])
        .arg("--deck")
        .arg(&deck)
        .write_stdin("1\n".repeat(4))
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["score"]["total"], 4);
    assert_eq!(report["pool_size"], 4);

    let answers = report["answers"].as_array().unwrap();
    let indices: HashSet<u64> = answers
        .iter()
        .map(|a| a["index"].as_u64().unwrap())
        .collect();
    assert_eq!(indices.len(), 4);

    // The quiz itself went to stderr.
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Question 4/4:"));
}

#[test]
fn same_seed_gives_same_report_answers() {
    let dir = TempDir::new().unwrap();
    let run = |dir: &TempDir| {
        let output = termquiz(dir)
            .args(["run", "--count", "5", "--format", "json", "--seed", "42"])
            .write_stdin("2\n".repeat(5))
            .output()
            .unwrap();
        let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        report["answers"].clone()
    };
    assert_eq!(run(&dir), run(&dir));
}

#[test]
fn invalid_response_is_reprompted() {
    let dir = TempDir::new().unwrap();
    let deck = write_deck(&dir, "four.txt", FOUR_PAIRS);
    termquiz(&dir)
        .args(["run", "--count", "1"])
        .arg("--deck")
        .arg(&deck)
        .write_stdin("9\nbanana\n1\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("'9' is not one of 1, 2, 3, 4"))
        .stdout(predicate::str::contains("'banana' is not one of"))
        .stdout(predicate::str::contains("out of 1 correct"));
}

#[test]
fn undecodable_response_is_reprompted() {
    let dir = TempDir::new().unwrap();
    let deck = write_deck(&dir, "four.txt", FOUR_PAIRS);
    termquiz(&dir)
        .args(["run", "--count", "1"])
        .arg("--deck")
        .arg(&deck)
        .write_stdin(&b"\xff\xfe\n1\n"[..])
        .assert()
        .success()
        .stdout(predicate::str::contains("is not one of 1, 2, 3, 4"))
        .stdout(predicate::str::contains("out of 1 correct"));
}

#[test]
fn alpha_labels_accept_letters() {
    let dir = TempDir::new().unwrap();
    let deck = write_deck(&dir, "four.txt", FOUR_PAIRS);
    termquiz(&dir)
        .args(["run", "--count", "2", "--labels", "alpha"])
        .arg("--deck")
        .arg(&deck)
        .write_stdin("a\nB\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("A. "))
        .stdout(predicate::str::contains("Enter the letter of your answer:"))
        .stdout(predicate::str::contains("out of 2 correct"));
}

#[test]
fn unknown_label_style_is_a_usage_error() {
    let dir = TempDir::new().unwrap();
    termquiz(&dir)
        .args(["run", "--labels", "roman"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("unknown label style: roman"));
}

#[test]
fn deck_with_too_few_definitions_fails() {
    let dir = TempDir::new().unwrap();
    let deck = write_deck(
        &dir,
        "tiny.txt",
        "a{-tab-}1{-line_break-}b{-tab-}2{-line_break-}c{-tab-}3",
    );
    termquiz(&dir)
        .arg("run")
        .arg("--deck")
        .arg(&deck)
        .write_stdin("1\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("insufficient distinct distractors"))
        .stderr(predicate::str::contains("termquiz validate"));
}

#[test]
fn closed_input_fails() {
    let dir = TempDir::new().unwrap();
    termquiz(&dir)
        .args(["run", "--count", "3"])
        .write_stdin("1\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("input closed after 1 of 3 questions"));
}

#[test]
fn empty_deck_fails() {
    let dir = TempDir::new().unwrap();
    let deck = write_deck(&dir, "empty.txt", "no delimiters here");
    termquiz(&dir)
        .arg("run")
        .arg("--deck")
        .arg(&deck)
        .assert()
        .failure()
        .stderr(predicate::str::contains("contains no records"));
}

#[test]
fn missing_deck_file_fails() {
    let dir = TempDir::new().unwrap();
    termquiz(&dir)
        .args(["run", "--deck", "nope.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("nope.txt"));
}

#[test]
fn config_file_sets_question_count() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("termquiz.toml"), "question_count = 2\n").unwrap();
    termquiz(&dir)
        .write_stdin("1\n1\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Question 2/2:"))
        .stdout(predicate::str::contains("out of 2 correct"));
}

#[test]
fn validate_builtin_deck() {
    let dir = TempDir::new().unwrap();
    termquiz(&dir)
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("built-in deck (15 records)"))
        .stdout(predicate::str::contains("Deck valid."));
}

#[test]
fn validate_reports_skipped_fragments_and_warnings() {
    let dir = TempDir::new().unwrap();
    let deck = write_deck(
        &dir,
        "messy.txt",
        "a{-tab-}1{-line_break-}a{-tab-}2{-line_break-}orphan{-line_break-}b{-tab-}",
    );
    termquiz(&dir)
        .arg("validate")
        .arg("--deck")
        .arg(&deck)
        .assert()
        .success()
        .stdout(predicate::str::contains("(2 records)"))
        .stdout(predicate::str::contains("SKIPPED (no field delimiter): orphan"))
        .stdout(predicate::str::contains("SKIPPED (empty definition)"))
        .stdout(predicate::str::contains("duplicate term"))
        .stdout(predicate::str::contains("warning(s) found"));
}

#[test]
fn init_creates_files_then_skips() {
    let dir = TempDir::new().unwrap();
    termquiz(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created termquiz.toml"))
        .stdout(predicate::str::contains("Created decks/example.txt"));

    assert!(dir.path().join("termquiz.toml").exists());
    assert!(dir.path().join("decks/example.txt").exists());

    termquiz(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists, skipping"));
}

#[test]
fn init_output_is_runnable() {
    let dir = TempDir::new().unwrap();
    termquiz(&dir).arg("init").assert().success();
    termquiz(&dir)
        .args(["run", "--deck", "decks/example.txt", "--count", "3"])
        .write_stdin("1\n1\n1\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("out of 3 correct"));
}
