//! list-repos command tests.

use crate::support::*;
use predicates::prelude::*;

const RECORDED: &str = r#"{
  "repositories": {
    "acme/widgets": {
      "secrets": ["API_KEY", "DATABASE_URL"],
      "workflows": ["ci.yml"],
      "last_update": "2024-05-01T12:00:00Z"
    }
  }
}
"#;

#[test]
fn test_list_repos_empty() {
    let t = Test::new();

    t.list_repos()
        .success()
        .stdout(predicate::str::contains("no repositories recorded yet"));
    assert!(t.dir.path().join("repos.json").is_file());
}

#[test]
fn test_list_repos_json_empty() {
    let t = Test::new();

    let json = stdout_json(&t.list_repos_json().success());
    assert_eq!(json, serde_json::json!({ "repositories": {} }));
}

#[test]
fn test_list_repos_shows_records() {
    let t = Test::new();
    std::fs::write(t.dir.path().join("repos.json"), RECORDED).unwrap();

    t.list_repos()
        .success()
        .stdout(predicate::str::contains("acme/widgets"))
        .stdout(predicate::str::contains("API_KEY, DATABASE_URL"))
        .stdout(predicate::str::contains("ci.yml"))
        .stdout(predicate::str::contains("2024-05-01 12:00 UTC"));
}

#[test]
fn test_list_repos_json_roundtrips_file() {
    let t = Test::new();
    std::fs::write(t.dir.path().join("repos.json"), RECORDED).unwrap();

    let json = stdout_json(&t.list_repos_json().success());
    let record = &json["repositories"]["acme/widgets"];
    assert_eq!(record["workflows"], serde_json::json!(["ci.yml"]));
    assert_eq!(record["last_update"], "2024-05-01T12:00:00Z");
}

#[test]
fn test_list_repos_uses_configured_state_dir() {
    let t = Test::new();
    t.use_state_dir();
    std::fs::write(t.state_file("repos.json"), RECORDED).unwrap();

    t.list_repos()
        .success()
        .stdout(predicate::str::contains("acme/widgets"));
    assert!(!t.dir.path().join("repos.json").exists());
}
