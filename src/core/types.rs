//! Type aliases for domain concepts.
//!
//! Provides semantic type aliases to make function signatures more descriptive.

/// A secret name as known to GitHub Actions (e.g., API_KEY).
pub type SecretName = String;

/// A workflow file name (e.g., ci.yml).
pub type WorkflowName = String;

/// Base64 ciphertext ready to be sent to the secrets API.
pub type EncryptedValue = String;

/// Identifier GitHub assigns to a repository public key.
pub type KeyId = String;
