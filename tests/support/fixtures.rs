//! Test fixtures and constants.

/// Repository used across tests.
pub const REPO: &str = "acme/widgets";

/// Minimal valid workflow.
pub const CI_WORKFLOW: &str = "name: CI
on: [push]
jobs:
  build:
    runs-on: ubuntu-latest
    steps:
      - uses: actions/checkout@v4
      - run: cargo test
";

/// A second revision of [`CI_WORKFLOW`].
pub const CI_WORKFLOW_V2: &str = "name: CI
on: [push, pull_request]
jobs:
  build:
    runs-on: ubuntu-latest
    steps:
      - uses: actions/checkout@v4
      - run: cargo test --all-features
";

/// Secrets commonly saved before batch runs.
pub const SAVED_SECRETS: &[(&str, &str)] = &[
    ("API_KEY", "sk_live_123"),
    ("DATABASE_URL", "postgres://localhost/widgets"),
    ("SLACK_WEBHOOK", "https://hooks.slack.com/services/T000/B000/XXX"),
];

/// Repository strings that must be rejected before any I/O.
pub const INVALID_REPOS: &[&str] = &[
    "no-slash", "widgets", "", "/", "acme/", "/widgets", "a/b/c", "acme/.", "acme/..", "acme/a b",
];
