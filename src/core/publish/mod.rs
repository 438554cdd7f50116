//! Publish pipelines.
//!
//! [`Publisher`] owns the collaborators (API client, git backend, local
//! store) and runs the closed set of [`Operation`]s:
//!
//! ```text
//! secret:   Validating -> FetchingKey -> Encrypting -> Upserting -> Persisting
//! workflow: Validating -> Acquiring -> Writing -> Committing -> Pushing -> Persisting
//! ```
//!
//! Persisting is only reached after the remote side accepted the change, so
//! the local store never gets ahead of GitHub.

mod batch;
mod secret;
mod workflow;

use std::fmt;
use std::path::PathBuf;

use crate::core::constants;
use crate::core::domain::{RepoId, Secret, Workflow};
use crate::core::git::{Git, PushStatus};
use crate::core::github::SecretsApi;
use crate::core::store::Store;
use crate::error::Result;

pub use batch::{BatchReport, Skipped};
pub use workflow::Location;

/// Pipeline stage, used in logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Validating,
    FetchingKey,
    Encrypting,
    Upserting,
    Acquiring,
    Writing,
    Committing,
    Pushing,
    Persisting,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Validating => "validating",
            Stage::FetchingKey => "fetching-key",
            Stage::Encrypting => "encrypting",
            Stage::Upserting => "upserting",
            Stage::Acquiring => "acquiring",
            Stage::Writing => "writing",
            Stage::Committing => "committing",
            Stage::Pushing => "pushing",
            Stage::Persisting => "persisting",
        };
        f.write_str(name)
    }
}

/// A single publish request.
#[derive(Debug, Clone)]
pub enum Operation {
    SecretPublish { repo: String, secret: Secret },
    WorkflowPublish { repo: String, workflow: Workflow },
}

/// A secret that now exists on GitHub.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretPublished {
    pub repo: RepoId,
    pub name: String,
    /// Id of the repository key the value was encrypted to.
    pub key_id: String,
}

/// A workflow file that now exists on the remote branch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkflowPublished {
    pub repo: RepoId,
    pub name: String,
    pub location: Location,
    /// New commit id, or `None` when the file was already committed.
    pub commit: Option<String>,
    pub push: PushStatus,
}

/// Result of [`Publisher::execute`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Secret(SecretPublished),
    Workflow(WorkflowPublished),
}

/// Runs publish operations against GitHub and records them locally.
pub struct Publisher<A, G> {
    pub(super) api: A,
    pub(super) git: G,
    pub(super) store: Store,
    pub(super) workspace: PathBuf,
    pub(super) git_url: String,
}

impl<A: SecretsApi, G: Git> Publisher<A, G> {
    /// Create a publisher working from the current directory and cloning
    /// from github.com.
    pub fn new(api: A, git: G, store: Store) -> Self {
        Self {
            api,
            git,
            store,
            workspace: PathBuf::from("."),
            git_url: constants::DEFAULT_GIT_URL.to_string(),
        }
    }

    /// Directory used to find or reuse working copies.
    pub fn with_workspace(mut self, dir: impl Into<PathBuf>) -> Self {
        self.workspace = dir.into();
        self
    }

    /// Base URL clone URLs are built from.
    pub fn with_git_url(mut self, url: impl Into<String>) -> Self {
        self.git_url = url.into();
        self
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Run one operation to completion.
    ///
    /// # Errors
    ///
    /// Returns the first error of the pipeline; see [`Publisher::add_secret`]
    /// and [`Publisher::add_workflow`].
    pub fn execute(&self, operation: Operation) -> Result<Outcome> {
        match operation {
            Operation::SecretPublish { repo, secret } => self
                .add_secret(&repo, secret.name(), secret.value())
                .map(Outcome::Secret),
            Operation::WorkflowPublish { repo, workflow } => self
                .add_workflow(&repo, workflow.name(), workflow.content())
                .map(Outcome::Workflow),
        }
    }
}
