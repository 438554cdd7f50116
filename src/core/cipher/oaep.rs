//! RSA-OAEP encryption for DER-encoded RSA public keys.

use rand::rngs::OsRng;
use rsa::pkcs1::DecodeRsaPublicKey;
use rsa::pkcs8::DecodePublicKey;
use rsa::{Oaep, RsaPublicKey};
use sha2::Sha256;
use tracing::debug;

use super::Cipher;
use crate::error::{CipherError, Result};

/// RSA backend: OAEP padding, SHA-256 hash and MGF1, empty label.
#[derive(Debug, Clone)]
pub struct RsaOaep {
    key: RsaPublicKey,
}

impl RsaOaep {
    pub fn new(key: RsaPublicKey) -> Self {
        Self { key }
    }

    /// Parse a DER public key, trying PKIX (SubjectPublicKeyInfo) first and
    /// PKCS#1 second.
    ///
    /// # Errors
    ///
    /// Returns `CipherError::UnsupportedKeyFormat` if neither encoding parses
    /// or the PKIX key is not an RSA key.
    pub fn from_der(der: &[u8]) -> Result<Self> {
        let key = match RsaPublicKey::from_public_key_der(der) {
            Ok(key) => key,
            Err(pkix_err) => {
                debug!(error = %pkix_err, "not a PKIX RSA key, trying PKCS#1");
                RsaPublicKey::from_pkcs1_der(der).map_err(|_| {
                    CipherError::UnsupportedKeyFormat(format!(
                        "{} byte key is neither a sealed-box key nor an RSA key ({})",
                        der.len(),
                        pkix_err
                    ))
                })?
            }
        };
        Ok(Self::new(key))
    }
}

impl Cipher for RsaOaep {
    fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        self.key
            .encrypt(&mut OsRng, Oaep::new::<Sha256>(), plaintext)
            .map_err(|e| CipherError::EncryptionFailed(format!("rsa-oaep: {}", e)).into())
    }

    fn name(&self) -> &'static str {
        "rsa-oaep-sha256"
    }
}
