//! General CLI behavior: help, version, completions, error output.

use crate::support::*;
use predicates::prelude::*;

#[test]
fn test_version() {
    let t = Test::new();

    t.cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_help_lists_commands() {
    let t = Test::new();

    t.cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("add-secret"))
        .stdout(predicate::str::contains("add-workflow"))
        .stdout(predicate::str::contains("add-saved-secrets"))
        .stdout(predicate::str::contains("list-repos"))
        .stdout(predicate::str::contains("store-config"));
}

#[test]
fn test_completions_bash() {
    let t = Test::new();

    t.cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ghm"));
}

#[test]
fn test_unknown_command_fails() {
    let t = Test::new();

    t.cmd().arg("push-everything").assert().failure();
}

#[test]
fn test_errors_are_prefixed() {
    let t = Test::new();

    t.add_secret("widgets", "API_KEY", "v")
        .failure()
        .stderr(predicate::str::contains("✗ invalid repository format"));
}
