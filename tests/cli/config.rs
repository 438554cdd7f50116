//! store-config command tests.

use crate::support::*;
use predicates::prelude::*;

#[test]
fn test_store_config_creates_file() {
    let t = Test::new();

    t.store_config("github_token", "ghp_abc123")
        .success()
        .stdout(predicate::str::contains("saved github_token"));

    let contents = std::fs::read_to_string(t.dir.path().join(".ghm.toml")).unwrap();
    let parsed: toml::Value = toml::from_str(&contents).unwrap();
    assert_eq!(parsed["github"]["token"].as_str(), Some("ghp_abc123"));
    assert_eq!(
        parsed["github"]["api_url"].as_str(),
        Some("https://api.github.com")
    );
}

#[test]
fn test_store_config_keeps_other_values() {
    let t = Test::new();

    t.store_config("github.timeout_secs", "5").success();
    t.store_config("github_token", "ghp_abc123").success();

    let contents = std::fs::read_to_string(t.dir.path().join(".ghm.toml")).unwrap();
    assert!(contents.contains("timeout_secs = 5"));
    assert!(contents.contains("ghp_abc123"));
}

#[cfg(unix)]
#[test]
fn test_config_file_is_owner_only() {
    use std::os::unix::fs::PermissionsExt;

    let t = Test::new();
    t.store_config("github_token", "ghp_abc123").success();

    let mode = std::fs::metadata(t.dir.path().join(".ghm.toml"))
        .unwrap()
        .permissions()
        .mode()
        & 0o777;
    assert_eq!(mode, 0o600);
}

#[test]
fn test_unknown_key_fails_with_hint() {
    let t = Test::new();

    t.cmd()
        .args(["store-config", "-k", "colour", "-v", "blue"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown config key: colour"))
        .stderr(predicate::str::contains("github.timeout_secs"));

    assert!(!t.dir.path().join(".ghm.toml").exists());
}

#[test]
fn test_invalid_value_is_rejected() {
    let t = Test::new();

    t.cmd()
        .args(["store-config", "-k", "github.timeout_secs", "-v", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("github.timeout_secs"));
}

#[test]
fn test_malformed_config_is_reported() {
    let t = Test::new();
    std::fs::write(t.dir.path().join(".ghm.toml"), "[github\n").unwrap();

    t.cmd()
        .arg("list-repos")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse config"));
}
