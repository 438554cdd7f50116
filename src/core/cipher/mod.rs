//! Secret encryption for the GitHub Actions secrets API.
//!
//! GitHub hands out a per-repository public key and only accepts secrets
//! encrypted to it. Two key formats are supported:
//!
//! - **sealed box**: a raw 32-byte X25519 key (the format the secrets API
//!   serves today), encrypted with libsodium's anonymous `crypto_box_seal`.
//! - **RSA**: a DER-encoded RSA key (PKIX first, then PKCS#1), encrypted with
//!   OAEP using SHA-256 for both the hash and MGF1 and an empty label.
//!
//! The backend is picked from the decoded key length, see [`encrypt`].

use base64::{engine::general_purpose::STANDARD, Engine as _};
use tracing::trace;
use zeroize::Zeroizing;

use crate::core::constants::SEALED_BOX_KEY_LEN;
use crate::core::domain::RepositoryPublicKey;
use crate::error::{CipherError, Result};

mod oaep;
mod sealed;

pub use oaep::RsaOaep;
pub use sealed::SealedBox;

/// Public-key encryption backend.
pub trait Cipher {
    /// Encrypt `plaintext` to the public key, returning raw ciphertext bytes.
    ///
    /// # Errors
    ///
    /// Returns `CipherError` if the key cannot be used or encryption fails.
    fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>>;

    /// Backend name for logs.
    fn name(&self) -> &'static str;
}

/// Backend selected for a decoded key.
#[derive(Debug)]
pub enum CipherBackend {
    SealedBox(SealedBox),
    Rsa(RsaOaep),
}

impl CipherBackend {
    /// Pick a backend for base64 key material.
    ///
    /// # Errors
    ///
    /// `CipherError::InvalidKey` for empty or non-base64 input,
    /// `CipherError::UnsupportedKeyFormat` when the bytes are neither a
    /// 32-byte sealed-box key nor an RSA key.
    pub fn from_key(key: &str) -> Result<Self> {
        if key.trim().is_empty() {
            return Err(CipherError::InvalidKey("key material is empty".to_string()).into());
        }

        let bytes = STANDARD
            .decode(key.trim())
            .map_err(|e| CipherError::InvalidKey(format!("not valid base64: {}", e)))?;

        if bytes.len() == SEALED_BOX_KEY_LEN {
            return Ok(Self::SealedBox(SealedBox::from_slice(&bytes)?));
        }

        Ok(Self::Rsa(RsaOaep::from_der(&bytes)?))
    }
}

impl Cipher for CipherBackend {
    fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        match self {
            Self::SealedBox(c) => c.encrypt(plaintext),
            Self::Rsa(c) => c.encrypt(plaintext),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::SealedBox(c) => c.name(),
            Self::Rsa(c) => c.name(),
        }
    }
}

/// Encrypt a secret value for a repository public key.
///
/// Returns base64 ciphertext suitable for the `encrypted_value` field of the
/// create-or-update secret request.
///
/// # Errors
///
/// See [`CipherBackend::from_key`]; `CipherError::EncryptionFailed` if the
/// backend rejects the plaintext (e.g. too long for the RSA modulus).
pub fn encrypt(plaintext: &str, public_key: &RepositoryPublicKey) -> Result<String> {
    let backend = CipherBackend::from_key(&public_key.key)?;

    trace!(
        backend = backend.name(),
        key_id = %public_key.key_id,
        plaintext_len = plaintext.len(),
        "encrypting"
    );

    let plaintext = Zeroizing::new(plaintext.as_bytes().to_vec());
    let ciphertext = backend.encrypt(&plaintext)?;

    trace!(ciphertext_len = ciphertext.len(), "encrypted");

    Ok(STANDARD.encode(ciphertext))
}
