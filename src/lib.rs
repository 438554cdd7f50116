//! ghm - Push GitHub Actions secrets and workflows from the command line.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── secret        # add-secret, add-saved-secrets
//! │   ├── workflow      # add-workflow, add-saved-workflows
//! │   ├── repos         # list-repos
//! │   ├── config        # store-config
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── config        # .ghm.toml management
//!     ├── cipher/       # Secret encryption
//!     │   ├── mod       # Cipher trait, key-format dispatch
//!     │   ├── sealed    # libsodium sealed box (X25519)
//!     │   └── oaep      # RSA-OAEP SHA-256
//!     ├── domain/       # RepoId, Secret, Workflow, keys, records
//!     ├── github/       # SecretsApi trait and REST client
//!     ├── git/          # Git trait and git CLI backend
//!     ├── publish/      # Secret, workflow and batch pipelines
//!     ├── store/        # secrets.json, workflows.json, repos.json
//!     └── validation    # Input checks run before any I/O
//! ```
//!
//! # Example
//!
//! ```no_run
//! use std::time::Duration;
//!
//! use ghm::core::git::GitCli;
//! use ghm::core::github::GitHubClient;
//! use ghm::core::publish::Publisher;
//! use ghm::core::store::Store;
//!
//! # fn main() -> ghm::error::Result<()> {
//! let token = "ghp_example";
//! let timeout = Duration::from_secs(30);
//! let api = GitHubClient::new("https://api.github.com", token, timeout)?;
//! let git = GitCli::new(token, timeout);
//!
//! let publisher = Publisher::new(api, git, Store::new("."));
//! publisher.add_secret("acme/widgets", "API_KEY", "sk_live_123")?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod core;
pub mod error;
