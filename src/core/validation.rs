//! Input validation for publish operations.
//!
//! Runs before any network or disk access.

use crate::core::domain::RepoId;
use crate::error::{Result, ValidationError};

/// Parse and validate an `owner/repo` identifier.
///
/// # Errors
///
/// Returns `ValidationError::InvalidRepoFormat` unless the input has exactly
/// two non-empty segments separated by `/`.
pub fn validate_repo(repo: &str) -> Result<RepoId> {
    Ok(RepoId::parse(repo)?)
}

/// Require a non-empty field.
///
/// # Errors
///
/// Returns `ValidationError::MissingField` naming `field` if `value` is empty.
pub fn require(field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::MissingField(field).into());
    }
    Ok(())
}

/// Validate an Actions secret name.
///
/// GitHub accepts `[A-Za-z0-9_]`, no leading digit and no `GITHUB_` prefix
/// (in any case). The name is also a URL path segment, so anything else is
/// rejected here rather than by the API.
///
/// # Errors
///
/// Returns `ValidationError::MissingField` if empty and
/// `ValidationError::InvalidSecretName` otherwise.
pub fn validate_secret_name(name: &str) -> Result<()> {
    require("secret name", name)?;

    let valid = name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
        && !name.starts_with(|c: char| c.is_ascii_digit())
        && !name.to_ascii_uppercase().starts_with("GITHUB_");

    if !valid {
        return Err(ValidationError::InvalidSecretName(name.to_string()).into());
    }
    Ok(())
}

/// Validate a workflow file name.
///
/// The name becomes a path under `.github/workflows/`, so it must be a single
/// plain file name.
///
/// # Errors
///
/// Returns `ValidationError::MissingField` if empty and
/// `ValidationError::InvalidWorkflowName` if it contains a path separator or
/// is `.`/`..`.
pub fn validate_workflow_name(name: &str) -> Result<()> {
    require("workflow name", name)?;

    if name.contains('/') || name.contains('\\') || name == "." || name == ".." {
        return Err(ValidationError::InvalidWorkflowName(name.to_string()).into());
    }

    Ok(())
}
