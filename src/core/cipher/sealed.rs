//! Anonymous sealed-box encryption (libsodium `crypto_box_seal`).
//!
//! An ephemeral X25519 key pair and nonce are generated per call, so the
//! recipient can decrypt but cannot identify the sender.

use crypto_box::PublicKey;
use rand::rngs::OsRng;

use super::Cipher;
use crate::error::{CipherError, Result};

/// Sealed-box backend bound to a recipient public key.
#[derive(Debug, Clone)]
pub struct SealedBox {
    recipient: PublicKey,
}

impl SealedBox {
    pub fn new(recipient: PublicKey) -> Self {
        Self { recipient }
    }

    /// Build from raw 32-byte key material.
    ///
    /// # Errors
    ///
    /// Returns `CipherError::InvalidKey` if the slice is not 32 bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let raw: [u8; 32] = bytes.try_into().map_err(|_| {
            CipherError::InvalidKey(format!("expected 32 bytes, got {}", bytes.len()))
        })?;
        Ok(Self::new(PublicKey::from(raw)))
    }
}

impl Cipher for SealedBox {
    fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        self.recipient
            .seal(&mut OsRng, plaintext)
            .map_err(|e| CipherError::EncryptionFailed(format!("sealed box: {}", e)).into())
    }

    fn name(&self) -> &'static str {
        "sealed-box"
    }
}
