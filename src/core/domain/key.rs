//! Repository public key and the encrypted payload sent back with it.

use serde::{Deserialize, Serialize};

use crate::core::types::{EncryptedValue, KeyId};

/// A repository's current secrets public key.
///
/// Never persisted: GitHub may rotate it, so it is fetched for every publish.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryPublicKey {
    pub key_id: KeyId,
    /// Base64 key material.
    pub key: String,
}

impl RepositoryPublicKey {
    pub fn new(key_id: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            key_id: key_id.into(),
            key: key.into(),
        }
    }
}

/// Body of the create-or-update secret request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncryptedSecret {
    pub encrypted_value: EncryptedValue,
    pub key_id: KeyId,
}
