//! add-secret and add-saved-secrets command tests.
//!
//! Nothing here reaches GitHub: failures are provoked before the network or
//! against a closed local port.

use crate::support::*;
use predicates::prelude::*;

/// Point the API at a port nothing listens on.
fn offline(t: &Test) {
    t.store_config("github.api_url", "http://127.0.0.1:9").success();
    t.store_config("github.timeout_secs", "2").success();
}

#[test]
fn test_invalid_repo_fails_before_network() {
    let t = Test::new();

    t.add_secret("widgets", "API_KEY", "sk_live_123")
        .failure()
        .stderr(predicate::str::contains("invalid repository format: 'widgets'"))
        .stderr(predicate::str::contains("owner/name"));

    assert!(!t.dir.path().join("secrets.json").exists());
    assert!(!t.dir.path().join(".ghm.toml").exists());
}

#[test]
fn test_missing_token_without_terminal() {
    let t = Test::new();

    t.add_secret(REPO, "API_KEY", "sk_live_123")
        .failure()
        .stderr(predicate::str::contains("no GitHub token configured"))
        .stderr(predicate::str::contains("GITHUB_TOKEN"));
}

#[test]
fn test_invalid_secret_name_fails_before_token_lookup() {
    let t = Test::new();

    t.add_secret(REPO, "A/B", "sk_live_123")
        .failure()
        .stderr(predicate::str::contains("invalid secret name: 'A/B'"))
        .stderr(predicate::str::contains("no GitHub token").not());

    assert!(!t.dir.path().join("secrets.json").exists());
}

#[test]
fn test_unreachable_api_leaves_store_untouched() {
    let t = Test::new();
    offline(&t);

    t.cmd()
        .args(["--token", "ghp_test", "add-secret", "-r", REPO, "-n", "API_KEY", "-v", "v"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("127.0.0.1:9"));

    assert!(!t.dir.path().join("secrets.json").exists());
    assert!(!t.dir.path().join("repos.json").exists());
}

#[test]
fn test_token_from_environment() {
    let t = Test::new();
    offline(&t);

    // Gets past token resolution, then fails on the network.
    t.cmd()
        .env("GITHUB_TOKEN", "ghp_env")
        .args(["add-secret", "-r", REPO, "-n", "API_KEY", "-v", "v"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no GitHub token").not());
}

#[test]
fn test_value_read_from_stdin() {
    let t = Test::new();
    offline(&t);

    t.cmd()
        .args(["--token", "ghp_test", "add-secret", "-r", REPO, "-n", "API_KEY"])
        .write_stdin("sk_live_123\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("127.0.0.1:9"));
}

#[test]
fn test_add_saved_with_nothing_saved() {
    let t = Test::new();

    t.cmd()
        .args(["add-saved-secrets", "-r", REPO])
        .assert()
        .success()
        .stdout(predicate::str::contains("no saved secrets"));
}

#[test]
fn test_add_saved_requires_names_without_terminal() {
    let t = Test::new();
    std::fs::write(t.dir.path().join("secrets.json"), r#"{"API_KEY":"v"}"#).unwrap();

    t.cmd()
        .args(["add-saved-secrets", "-r", REPO])
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing required field: secret names"));
}

#[test]
fn test_add_saved_is_best_effort() {
    let t = Test::new();
    offline(&t);
    std::fs::write(t.dir.path().join("secrets.json"), r#"{"API_KEY":"v"}"#).unwrap();

    t.cmd()
        .args(["--token", "ghp_test", "add-saved-secrets", "-r", REPO, "API_KEY", "MISSING"])
        .assert()
        .success()
        .stdout(predicate::str::contains("skipped MISSING"))
        .stdout(predicate::str::contains("skipped API_KEY"))
        .stdout(predicate::str::contains("0 applied, 2 skipped"));

    assert!(!t.dir.path().join("repos.json").exists());
}
