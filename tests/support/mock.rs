//! In-memory doubles for the GitHub API and git.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use base64::{engine::general_purpose::STANDARD, Engine as _};
use crypto_box::SecretKey;
use rand::rngs::OsRng;

use ghm::core::domain::{EncryptedSecret, RepoId, RepositoryPublicKey};
use ghm::core::git::{Git, PushStatus, Signature};
use ghm::core::github::SecretsApi;
use ghm::error::{CommandFailed, GitError, RemoteError, Result};

/// A recorded upsert.
#[derive(Debug, Clone)]
pub struct Upsert {
    pub repo: String,
    pub name: String,
    pub secret: EncryptedSecret,
}

/// GitHub secrets API double backed by a real X25519 key pair.
pub struct MockApi {
    secret_key: SecretKey,
    key_id: String,
    key_calls: Cell<usize>,
    fail_upsert: Cell<bool>,
    pub upserts: RefCell<Vec<Upsert>>,
}

impl MockApi {
    pub fn new() -> Self {
        Self {
            secret_key: SecretKey::generate(&mut OsRng),
            key_id: "568250167242549743".to_string(),
            key_calls: Cell::new(0),
            fail_upsert: Cell::new(false),
            upserts: RefCell::new(Vec::new()),
        }
    }

    /// A double whose upsert always answers 422.
    pub fn failing_upsert() -> Self {
        let api = Self::new();
        api.fail_upsert.set(true);
        api
    }

    pub fn set_fail_upsert(&self, fail: bool) {
        self.fail_upsert.set(fail);
    }

    pub fn key_id(&self) -> &str {
        &self.key_id
    }

    /// Total number of API calls made.
    pub fn calls(&self) -> usize {
        self.key_calls.get() + self.upserts.borrow().len()
    }

    /// Open a base64 sealed box produced for this double's key.
    pub fn decrypt(&self, encrypted_value: &str) -> String {
        let sealed = STANDARD.decode(encrypted_value).expect("not base64");
        let opened = self.secret_key.unseal(&sealed).expect("failed to unseal");
        String::from_utf8(opened).expect("not utf-8")
    }
}

impl SecretsApi for MockApi {
    fn public_key(&self, _repo: &RepoId) -> Result<RepositoryPublicKey> {
        self.key_calls.set(self.key_calls.get() + 1);
        let key = STANDARD.encode(self.secret_key.public_key().as_bytes());
        Ok(RepositoryPublicKey::new(self.key_id.clone(), key))
    }

    fn put_secret(&self, repo: &RepoId, name: &str, secret: &EncryptedSecret) -> Result<()> {
        self.upserts.borrow_mut().push(Upsert {
            repo: repo.to_string(),
            name: name.to_string(),
            secret: secret.clone(),
        });

        if self.fail_upsert.get() {
            return Err(RemoteError::Status {
                url: format!("mock://repos/{}/actions/secrets/{}", repo, name),
                status: 422,
                message: "Unprocessable Entity".to_string(),
            }
            .into());
        }
        Ok(())
    }
}

/// Git double simulating a single remote branch.
///
/// `clone_repo` materialises the remote files, `commit` compares the given
/// staged path against the remote, and `push` publishes pending changes.
pub struct MockGit {
    pub remote: RefCell<BTreeMap<String, String>>,
    pending: RefCell<BTreeMap<String, String>>,
    staged: RefCell<Vec<String>>,
    pub clones: RefCell<Vec<PathBuf>>,
    pub commits: RefCell<Vec<(String, Signature)>>,
    pub log: RefCell<Vec<&'static str>>,
    fail_clone: Cell<bool>,
    fail_push: Cell<bool>,
}

impl MockGit {
    pub fn new() -> Self {
        Self {
            remote: RefCell::new(BTreeMap::new()),
            pending: RefCell::new(BTreeMap::new()),
            staged: RefCell::new(Vec::new()),
            clones: RefCell::new(Vec::new()),
            commits: RefCell::new(Vec::new()),
            log: RefCell::new(Vec::new()),
            fail_clone: Cell::new(false),
            fail_push: Cell::new(false),
        }
    }

    pub fn set_fail_clone(&self, fail: bool) {
        self.fail_clone.set(fail);
    }

    pub fn set_fail_push(&self, fail: bool) {
        self.fail_push.set(fail);
    }

    /// Paths staged but not yet committed.
    pub fn staged(&self) -> Vec<String> {
        self.staged.borrow().clone()
    }

    pub fn remote_file(&self, path: &str) -> Option<String> {
        self.remote.borrow().get(path).cloned()
    }

    fn failed(command: &str) -> CommandFailed {
        CommandFailed {
            command: command.to_string(),
            status: "exit status: 128".to_string(),
            stderr: "fatal: mock failure".to_string(),
        }
    }
}

fn key(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

impl Git for MockGit {
    fn clone_repo(&self, url: &str, dest: &Path) -> Result<()> {
        self.log.borrow_mut().push("clone");
        self.clones.borrow_mut().push(dest.to_path_buf());

        if self.fail_clone.get() {
            return Err(GitError::Clone {
                repo: url.to_string(),
                source: Self::failed("clone"),
            }
            .into());
        }

        for (path, content) in self.remote.borrow().iter() {
            let file = dest.join(path);
            if let Some(parent) = file.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(file, content)?;
        }
        Ok(())
    }

    fn stage(&self, _workdir: &Path, path: &Path) -> Result<()> {
        self.log.borrow_mut().push("stage");
        self.staged.borrow_mut().push(key(path));
        Ok(())
    }

    fn commit(
        &self,
        workdir: &Path,
        path: &Path,
        message: &str,
        author: &Signature,
    ) -> Result<Option<String>> {
        self.log.borrow_mut().push("commit");

        let path = key(path);
        let mut staged = self.staged.borrow_mut();
        let Some(pos) = staged.iter().position(|p| *p == path) else {
            return Ok(None);
        };
        staged.remove(pos);
        drop(staged);

        let content = std::fs::read_to_string(workdir.join(&path))?;
        if self.remote.borrow().get(&path) == Some(&content) {
            return Ok(None);
        }
        self.pending.borrow_mut().insert(path, content);
        self.commits
            .borrow_mut()
            .push((message.to_string(), author.clone()));
        Ok(Some(format!("{:040x}", self.commits.borrow().len())))
    }

    fn push(&self, workdir: &Path) -> Result<PushStatus> {
        self.log.borrow_mut().push("push");

        if self.fail_push.get() {
            return Err(GitError::Push {
                workdir: workdir.to_path_buf(),
                source: Self::failed("push --porcelain origin HEAD"),
            }
            .into());
        }

        let mut pending = self.pending.borrow_mut();
        if pending.is_empty() {
            return Ok(PushStatus::UpToDate);
        }
        self.remote.borrow_mut().append(&mut pending);
        Ok(PushStatus::Pushed)
    }
}
