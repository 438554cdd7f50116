//! Error types.
//!
//! One enum per concern, wrapped by [`Error`]. Validation and cipher errors
//! are always raised before any network call; git errors keep the failing
//! command as their source for diagnostics.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Cipher(#[from] CipherError),

    #[error(transparent)]
    Remote(#[from] RemoteError),

    #[error(transparent)]
    Git(#[from] GitError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),
}

/// Malformed input, rejected before any I/O.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("invalid repository format: '{0}' (expected 'owner/repo')")]
    InvalidRepoFormat(String),

    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("invalid workflow name: '{0}' (expected a file name such as 'ci.yml')")]
    InvalidWorkflowName(String),

    #[error("invalid secret name: '{0}'")]
    InvalidSecretName(String),
}

/// Encryption failures.
#[derive(Error, Debug)]
pub enum CipherError {
    #[error("invalid public key: {0}")]
    InvalidKey(String),

    #[error("unsupported public key format: {0}")]
    UnsupportedKeyFormat(String),

    #[error("encryption failed: {0}")]
    EncryptionFailed(String),
}

/// GitHub API failures.
#[derive(Error, Debug)]
pub enum RemoteError {
    #[error("failed to build http client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("github returned {status} for {url}: {message}")]
    Status {
        url: String,
        status: u16,
        message: String,
    },

    #[error("unexpected response from {url}: {reason}")]
    InvalidResponse { url: String, reason: String },
}

/// A git invocation that exited unsuccessfully.
#[derive(Error, Debug)]
#[error("`git {command}` exited with {status}: {stderr}")]
pub struct CommandFailed {
    pub command: String,
    pub status: String,
    pub stderr: String,
}

/// Working-copy failures.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("git executable not found on PATH")]
    NotInstalled,

    #[error("failed to run git: {0}")]
    Spawn(#[source] std::io::Error),

    #[error("failed to clone {repo}")]
    Clone {
        repo: String,
        #[source]
        source: CommandFailed,
    },

    #[error("failed to stage {path}")]
    Stage {
        path: String,
        #[source]
        source: CommandFailed,
    },

    #[error("failed to commit in {workdir}")]
    Commit {
        workdir: PathBuf,
        #[source]
        source: CommandFailed,
    },

    #[error("failed to push from {workdir}")]
    Push {
        workdir: PathBuf,
        #[source]
        source: CommandFailed,
    },
}

/// Local state store failures.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{kind} not found in local store: {name}")]
    NotFound { kind: &'static str, name: String },
}

/// Configuration file failures.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to write config: {0}")]
    WriteFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),

    #[error("failed to serialize config: {0}")]
    Serialize(#[source] toml::ser::Error),

    #[error("no GitHub token configured")]
    MissingToken,

    #[error("unknown config key: {0}")]
    UnknownKey(String),

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// True for errors raised before any side effect took place.
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation(_))
    }
}
