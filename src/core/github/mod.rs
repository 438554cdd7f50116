//! GitHub Actions secrets API.
//!
//! The pipelines only need two calls, so they depend on the [`SecretsApi`]
//! trait; [`GitHubClient`] is the HTTP implementation.

mod client;

pub use client::GitHubClient;

use crate::core::domain::{EncryptedSecret, RepoId, RepositoryPublicKey};
use crate::error::Result;

/// Authenticated access to a repository's Actions secrets.
pub trait SecretsApi {
    /// Fetch the repository's current secrets public key.
    ///
    /// # Errors
    ///
    /// Returns `RemoteError` on transport failures or non-success responses.
    fn public_key(&self, repo: &RepoId) -> Result<RepositoryPublicKey>;

    /// Create or update a repository secret.
    ///
    /// # Errors
    ///
    /// Returns `RemoteError` on transport failures or non-success responses.
    fn put_secret(&self, repo: &RepoId, name: &str, secret: &EncryptedSecret) -> Result<()>;
}

impl<T: SecretsApi + ?Sized> SecretsApi for &T {
    fn public_key(&self, repo: &RepoId) -> Result<RepositoryPublicKey> {
        (**self).public_key(repo)
    }

    fn put_secret(&self, repo: &RepoId, name: &str, secret: &EncryptedSecret) -> Result<()> {
        (**self).put_secret(repo, name, secret)
    }
}
