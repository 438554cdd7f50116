//! Local state store.
//!
//! Three independent JSON documents under one directory:
//!
//! - `secrets.json`: saved secrets, name -> plaintext value
//! - `workflows.json`: saved workflows, name -> file content
//! - `repos.json`: per-repository record of what has been applied
//!
//! Every operation reads the document it needs in full and writes it back in
//! full. There is no locking; one process at a time is assumed.

mod file;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::constants;
use crate::core::domain::{RepoId, RepositoryRecord, Secret, Workflow};
use crate::error::{Result, StoreError};

/// Saved secrets (`secrets.json`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SavedSecrets(pub BTreeMap<String, String>);

/// Saved workflows (`workflows.json`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SavedWorkflows(pub BTreeMap<String, String>);

/// Sync records (`repos.json`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repositories {
    #[serde(default)]
    pub repositories: BTreeMap<String, RepositoryRecord>,
}

impl Repositories {
    pub fn get(&self, repo: &RepoId) -> Option<&RepositoryRecord> {
        self.repositories.get(&repo.to_string())
    }

    fn entry(&mut self, repo: &RepoId) -> &mut RepositoryRecord {
        self.repositories
            .entry(repo.to_string())
            .or_insert_with(|| RepositoryRecord::new(Utc::now()))
    }
}

/// One of the three documents the store manages.
pub trait Document: Serialize + for<'de> Deserialize<'de> + Default {
    /// File name inside the state directory.
    const FILE: &'static str;
    /// Whether the file holds plaintext secrets.
    const PRIVATE: bool = false;
}

impl Document for SavedSecrets {
    const FILE: &'static str = constants::SECRETS_FILE;
    const PRIVATE: bool = true;
}

impl Document for SavedWorkflows {
    const FILE: &'static str = constants::WORKFLOWS_FILE;
}

impl Document for Repositories {
    const FILE: &'static str = constants::REPOS_FILE;
}

/// File-backed state store rooted at a directory.
#[derive(Debug, Clone)]
pub struct Store {
    dir: PathBuf,
}

impl Store {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of a document's backing file.
    pub fn path<D: Document>(&self) -> PathBuf {
        self.dir.join(D::FILE)
    }

    /// Load a document, creating an empty one on first use.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the file cannot be read, parsed or created.
    pub fn load<D: Document>(&self) -> Result<D> {
        file::load_or_create(&self.path::<D>(), D::PRIVATE)
    }

    /// Overwrite a document's backing file.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Write` on failure.
    pub fn save<D: Document>(&self, doc: &D) -> Result<()> {
        file::save(&self.path::<D>(), doc, D::PRIVATE)
    }

    /// Look up a saved secret.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no secret has that name.
    pub fn secret(&self, name: &str) -> Result<Secret> {
        let secrets: SavedSecrets = self.load()?;
        secrets
            .0
            .get(name)
            .map(|value| Secret::new(name, value.as_str()))
            .ok_or_else(|| not_found("secret", name))
    }

    /// Look up a saved workflow.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no workflow has that name.
    pub fn workflow(&self, name: &str) -> Result<Workflow> {
        let workflows: SavedWorkflows = self.load()?;
        workflows
            .0
            .get(name)
            .map(|content| Workflow::new(name, content.as_str()))
            .ok_or_else(|| not_found("workflow", name))
    }

    /// Names of all saved secrets, sorted.
    pub fn secret_names(&self) -> Result<Vec<String>> {
        let secrets: SavedSecrets = self.load()?;
        Ok(secrets.0.into_keys().collect())
    }

    /// Names of all saved workflows, sorted.
    pub fn workflow_names(&self) -> Result<Vec<String>> {
        let workflows: SavedWorkflows = self.load()?;
        Ok(workflows.0.into_keys().collect())
    }

    /// Save (or overwrite) a secret.
    pub fn save_secret(&self, secret: &Secret) -> Result<()> {
        let mut secrets: SavedSecrets = self.load()?;
        secrets
            .0
            .insert(secret.name().to_string(), secret.value().to_string());
        self.save(&secrets)
    }

    /// Save (or overwrite) a workflow.
    pub fn save_workflow(&self, workflow: &Workflow) -> Result<()> {
        let mut workflows: SavedWorkflows = self.load()?;
        workflows
            .0
            .insert(workflow.name().to_string(), workflow.content().to_string());
        self.save(&workflows)
    }

    /// Record that a secret was applied to `repo`.
    pub fn record_secret(&self, repo: &RepoId, name: &str) -> Result<()> {
        debug!(repo = %repo, name, "recording secret");
        let mut repos: Repositories = self.load()?;
        repos.entry(repo).add_secret(name, Utc::now());
        self.save(&repos)
    }

    /// Record that a workflow was applied to `repo`.
    pub fn record_workflow(&self, repo: &RepoId, name: &str) -> Result<()> {
        debug!(repo = %repo, name, "recording workflow");
        let mut repos: Repositories = self.load()?;
        repos.entry(repo).add_workflow(name, Utc::now());
        self.save(&repos)
    }

    /// Save a secret and record it on `repo`.
    ///
    /// Both documents are loaded before either is written, so an unreadable
    /// or malformed file leaves both untouched. `secrets.json` is written
    /// first; if writing `repos.json` then fails the secret stays saved but
    /// unrecorded.
    pub fn remember_secret(&self, repo: &RepoId, secret: &Secret) -> Result<()> {
        let mut secrets: SavedSecrets = self.load()?;
        let mut repos: Repositories = self.load()?;

        debug!(repo = %repo, name = secret.name(), "remembering secret");
        secrets
            .0
            .insert(secret.name().to_string(), secret.value().to_string());
        repos.entry(repo).add_secret(secret.name(), Utc::now());

        self.save(&secrets)?;
        self.save(&repos)
    }

    /// Save a workflow and record it on `repo`. Same ordering as
    /// [`Store::remember_secret`].
    pub fn remember_workflow(&self, repo: &RepoId, workflow: &Workflow) -> Result<()> {
        let mut workflows: SavedWorkflows = self.load()?;
        let mut repos: Repositories = self.load()?;

        debug!(repo = %repo, name = workflow.name(), "remembering workflow");
        workflows
            .0
            .insert(workflow.name().to_string(), workflow.content().to_string());
        repos.entry(repo).add_workflow(workflow.name(), Utc::now());

        self.save(&workflows)?;
        self.save(&repos)
    }

    /// All repository records.
    pub fn repositories(&self) -> Result<Repositories> {
        self.load()
    }
}

fn not_found(kind: &'static str, name: &str) -> crate::error::Error {
    StoreError::NotFound {
        kind,
        name: name.to_string(),
    }
    .into()
}
