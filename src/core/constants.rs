//! Constants used throughout ghm.
//!
//! Centralizes file names, endpoints and the fixed commit identity.

/// Configuration file name (.ghm.toml).
pub const CONFIG_FILE: &str = ".ghm.toml";

/// Saved secrets document (name -> value).
pub const SECRETS_FILE: &str = "secrets.json";

/// Saved workflows document (name -> content).
pub const WORKFLOWS_FILE: &str = "workflows.json";

/// Per-repository sync records.
pub const REPOS_FILE: &str = "repos.json";

/// Default GitHub REST API base URL.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Default base URL used to build clone URLs.
pub const DEFAULT_GIT_URL: &str = "https://github.com";

/// Network timeout applied to API requests and git transfers.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// REST API version header value.
pub const GITHUB_API_VERSION: &str = "2022-11-28";

/// Directory holding workflow files inside a working copy.
pub const WORKFLOWS_DIR: &str = ".github/workflows";

/// Commit message used for every workflow commit.
pub const COMMIT_MESSAGE: &str = "Add GitHub Actions workflow";

/// Author name used for workflow commits.
pub const COMMIT_AUTHOR_NAME: &str = "ghm";

/// Author email used for workflow commits.
pub const COMMIT_AUTHOR_EMAIL: &str = "ghm@example.com";

/// Raw X25519 public keys (GitHub's current secrets key format) are 32 bytes.
pub const SEALED_BOX_KEY_LEN: usize = 32;
