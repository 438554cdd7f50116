//! Working-copy operations.
//!
//! The workflow pipeline needs clone, stage, commit and push. They sit behind
//! the [`Git`] trait; [`GitCli`] drives the `git` executable.

mod cli;

use std::path::Path;

pub use cli::GitCli;

use crate::error::Result;

/// Commit author identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    pub name: String,
    pub email: String,
}

impl Signature {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

impl std::fmt::Display for Signature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} <{}>", self.name, self.email)
    }
}

/// Result of a push.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PushStatus {
    /// New commits reached the remote.
    Pushed,
    /// The remote already had everything.
    UpToDate,
}

/// Git operations against a working copy on disk.
pub trait Git {
    /// Clone `url` into `dest` with token authentication.
    ///
    /// # Errors
    ///
    /// Returns `GitError::Clone` if the clone fails.
    fn clone_repo(&self, url: &str, dest: &Path) -> Result<()>;

    /// Stage exactly `path` (relative to `workdir`).
    ///
    /// # Errors
    ///
    /// Returns `GitError::Stage` if `git add` fails.
    fn stage(&self, workdir: &Path, path: &Path) -> Result<()>;

    /// Commit the staged state of exactly `path`. Other staged entries are
    /// left in the index and stay out of the commit. Returns the new commit
    /// id, or `None` when `path` has no staged change.
    ///
    /// # Errors
    ///
    /// Returns `GitError::Commit` if the commit fails.
    fn commit(
        &self,
        workdir: &Path,
        path: &Path,
        message: &str,
        author: &Signature,
    ) -> Result<Option<String>>;

    /// Push the current branch with token authentication.
    ///
    /// # Errors
    ///
    /// Returns `GitError::Push` for any failure other than "up to date".
    fn push(&self, workdir: &Path) -> Result<PushStatus>;
}

impl<T: Git + ?Sized> Git for &T {
    fn clone_repo(&self, url: &str, dest: &Path) -> Result<()> {
        (**self).clone_repo(url, dest)
    }

    fn stage(&self, workdir: &Path, path: &Path) -> Result<()> {
        (**self).stage(workdir, path)
    }

    fn commit(
        &self,
        workdir: &Path,
        path: &Path,
        message: &str,
        author: &Signature,
    ) -> Result<Option<String>> {
        (**self).commit(workdir, path, message, author)
    }

    fn push(&self, workdir: &Path) -> Result<PushStatus> {
        (**self).push(workdir)
    }
}
