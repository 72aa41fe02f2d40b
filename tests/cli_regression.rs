// CLI behaviour of the `goldish` binary.
// Requires: assert_cmd, predicates crates in [dev-dependencies]

use std::fs;

use assert_cmd::Command;
use predicates::{prelude::PredicateBooleanExt, str::contains};

fn goldish() -> Command {
    Command::cargo_bin("goldish").unwrap()
}

#[test]
fn show_prints_cases() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("t_cases.txt");
    fs::write(&file, "# hello\na:\n  1\n\nb:\n  2\n").unwrap();

    goldish()
        .arg("show")
        .arg(&file)
        .assert()
        .success()
        .stdout(contains("--- case 0 ---").and(contains("# hello")).and(contains("b: \"2\"")));
}

#[test]
fn show_json_is_machine_readable() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("t_cases.txt");
    fs::write(&file, "a:\n  1\n").unwrap();

    let output = goldish().arg("show").arg("--json").arg(&file).output().unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json[0]["fields"]["a"], "1");
}

#[test]
fn show_warns_about_stray_lines() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("t_cases.txt");
    fs::write(&file, "oops\na:\n  1\n").unwrap();

    goldish()
        .arg("show")
        .arg(&file)
        .assert()
        .success()
        .stderr(contains("skipped stray line"));
}

#[test]
fn fmt_check_fails_on_non_canonical_file() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("t_cases.txt");
    fs::write(&file, "sum:\n  2\na:\n  1\n").unwrap();

    goldish()
        .args(["fmt", "--check", "--keys", "a,sum"])
        .arg(&file)
        .assert()
        .failure()
        .stderr(contains("goldish::not_canonical").or(contains("canonical form")));
    assert_eq!(fs::read_to_string(&file).unwrap(), "sum:\n  2\na:\n  1\n");
}

#[test]
fn fmt_rewrites_file() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("t_cases.txt");
    fs::write(&file, "sum:\n  2\na:\n  1\n").unwrap();

    goldish()
        .args(["fmt", "--keys", "a,sum"])
        .arg(&file)
        .assert()
        .success();
    assert_eq!(fs::read_to_string(&file).unwrap(), "a:\n  1\nsum:\n  2\n");
}

#[test]
fn list_finds_case_files() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("one_cases.txt"), "a:\n  1\n\na:\n  2\n").unwrap();
    fs::write(dir.path().join("readme.md"), "not a case file").unwrap();

    goldish()
        .arg("list")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(contains("one_cases.txt").and(contains("2 cases")).and(contains("readme").not()));
}

#[test]
fn missing_file_reports_diagnostic() {
    goldish()
        .args(["show", "definitely/not/here_cases.txt"])
        .assert()
        .failure()
        .stderr(contains("goldish::io").or(contains("I/O error")));
}
