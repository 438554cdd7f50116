//! Workflow publish pipeline.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use tracing::{debug, info};

use super::{Publisher, Stage, WorkflowPublished};
use crate::core::constants;
use crate::core::domain::{RepoId, Workflow};
use crate::core::git::{Git, Signature};
use crate::core::github::SecretsApi;
use crate::core::validation;
use crate::error::Result;

/// Where the working copy came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    /// The workspace itself is the repository.
    InPlace,
    /// A directory named after the repository already existed in the workspace.
    Existing,
    /// A fresh clone in a temporary directory, removed afterwards.
    Cloned,
}

/// A working copy held for the duration of one publish. A cloned copy is
/// deleted when this value is dropped, on success and error alike.
enum WorkingCopy {
    InPlace(PathBuf),
    Existing(PathBuf),
    Cloned(TempDir),
}

impl WorkingCopy {
    fn path(&self) -> &Path {
        match self {
            WorkingCopy::InPlace(p) | WorkingCopy::Existing(p) => p,
            WorkingCopy::Cloned(tmp) => tmp.path(),
        }
    }

    fn location(&self) -> Location {
        match self {
            WorkingCopy::InPlace(_) => Location::InPlace,
            WorkingCopy::Existing(_) => Location::Existing,
            WorkingCopy::Cloned(_) => Location::Cloned,
        }
    }
}

impl<A: SecretsApi, G: Git> Publisher<A, G> {
    /// Write `.github/workflows/<name>` into the repository, commit and push
    /// it, then save the workflow locally and record it on the repository.
    ///
    /// Re-publishing identical content is a successful no-op: nothing is
    /// committed and the push reports up to date.
    ///
    /// # Errors
    ///
    /// - `ValidationError` for a malformed repository, name or empty content
    /// - `GitError::Clone`/`Stage`/`Commit`/`Push` from the git backend
    /// - `Io` if the workflow file cannot be written
    /// - `StoreError` if the local store cannot be written after the push
    pub fn add_workflow(&self, repo: &str, name: &str, content: &str) -> Result<WorkflowPublished> {
        debug!(stage = %Stage::Validating, repo, name, "publishing workflow");
        let repo = validation::validate_repo(repo)?;
        validation::validate_workflow_name(name)?;
        validation::require("workflow content", content)?;

        debug!(stage = %Stage::Acquiring, repo = %repo);
        let copy = self.acquire(&repo)?;
        let workdir = copy.path();

        debug!(stage = %Stage::Writing, workdir = %workdir.display(), name);
        let relative = Path::new(constants::WORKFLOWS_DIR).join(name);
        fs::create_dir_all(workdir.join(constants::WORKFLOWS_DIR))?;
        fs::write(workdir.join(&relative), content)?;

        debug!(stage = %Stage::Committing);
        self.git.stage(workdir, &relative)?;
        let author = Signature::new(constants::COMMIT_AUTHOR_NAME, constants::COMMIT_AUTHOR_EMAIL);
        let commit = self
            .git
            .commit(workdir, &relative, constants::COMMIT_MESSAGE, &author)?;

        debug!(stage = %Stage::Pushing, commit = ?commit);
        let push = self.git.push(workdir)?;

        debug!(stage = %Stage::Persisting, repo = %repo, name);
        self.store
            .remember_workflow(&repo, &Workflow::new(name, content))?;

        info!(repo = %repo, name, ?push, "workflow published");
        Ok(WorkflowPublished {
            repo,
            name: name.to_string(),
            location: copy.location(),
            commit,
            push,
        })
    }

    /// Find or create a working copy for `repo`.
    fn acquire(&self, repo: &RepoId) -> Result<WorkingCopy> {
        let root = self.workspace.canonicalize()?;

        if root.file_name().and_then(|n| n.to_str()) == Some(repo.name()) {
            debug!(path = %root.display(), "using workspace in place");
            return Ok(WorkingCopy::InPlace(root));
        }

        let existing = root.join(repo.name());
        if existing.is_dir() {
            debug!(path = %existing.display(), "reusing existing working copy");
            return Ok(WorkingCopy::Existing(existing));
        }

        let tmp = tempfile::Builder::new().prefix("ghm-repo-").tempdir()?;
        self.git
            .clone_repo(&repo.clone_url(&self.git_url), tmp.path())?;
        Ok(WorkingCopy::Cloned(tmp))
    }
}
