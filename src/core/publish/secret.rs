//! Secret publish pipeline.

use tracing::{debug, info};

use super::{Publisher, SecretPublished, Stage};
use crate::core::cipher;
use crate::core::domain::{EncryptedSecret, Secret};
use crate::core::git::Git;
use crate::core::github::SecretsApi;
use crate::core::validation;
use crate::error::{RemoteError, Result};

impl<A: SecretsApi, G: Git> Publisher<A, G> {
    /// Encrypt `value` to the repository's current public key, upsert it as
    /// Actions secret `name`, then save it locally and record it on the
    /// repository.
    ///
    /// Calling this again with a different value replaces the remote secret.
    ///
    /// # Errors
    ///
    /// - `ValidationError` for a malformed repository or secret name (no I/O
    ///   has happened yet)
    /// - `RemoteError` if the key fetch or the upsert fails
    /// - `CipherError` if the key cannot be used
    /// - `StoreError` if the local store cannot be written after the upsert
    pub fn add_secret(&self, repo: &str, name: &str, value: &str) -> Result<SecretPublished> {
        debug!(stage = %Stage::Validating, repo, name, "publishing secret");
        let repo = validation::validate_repo(repo)?;
        validation::validate_secret_name(name)?;

        debug!(stage = %Stage::FetchingKey, repo = %repo);
        let key = self.api.public_key(&repo)?;
        if key.key_id.trim().is_empty() {
            return Err(RemoteError::InvalidResponse {
                url: format!("repos/{}/actions/secrets/public-key", repo),
                reason: "public key has no key_id".to_string(),
            }
            .into());
        }

        debug!(stage = %Stage::Encrypting, key_id = %key.key_id);
        let encrypted_value = cipher::encrypt(value, &key)?;

        debug!(stage = %Stage::Upserting, repo = %repo, name);
        let payload = EncryptedSecret {
            encrypted_value,
            key_id: key.key_id.clone(),
        };
        self.api.put_secret(&repo, name, &payload)?;

        debug!(stage = %Stage::Persisting, repo = %repo, name);
        self.store.remember_secret(&repo, &Secret::new(name, value))?;

        info!(repo = %repo, name, "secret published");
        Ok(SecretPublished {
            repo,
            name: name.to_string(),
            key_id: key.key_id,
        })
    }
}
