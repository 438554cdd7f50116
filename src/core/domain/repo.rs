//! Repository identifier.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, ValidationError};

/// A GitHub repository in `owner/name` form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RepoId {
    owner: String,
    name: String,
}

impl RepoId {
    /// Parse `owner/name`.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidRepoFormat` unless the input splits
    /// into exactly two segments on `/`, each made of ASCII letters, digits,
    /// `.`, `-` or `_` and neither being `.` or `..`.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let mut parts = input.split('/');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(owner), Some(name), None) if is_segment(owner) && is_segment(name) => {
                Ok(Self {
                    owner: owner.to_string(),
                    name: name.to_string(),
                })
            }
            _ => Err(ValidationError::InvalidRepoFormat(input.to_string())),
        }
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Short repository name (the part after the slash).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// HTTPS clone URL under the given base, e.g. `https://github.com/acme/widgets.git`.
    pub fn clone_url(&self, base: &str) -> String {
        format!(
            "{}/{}/{}.git",
            base.trim_end_matches('/'),
            self.owner,
            self.name
        )
    }
}

/// The name doubles as a directory under the workspace, so `.` and `..` are
/// never valid.
fn is_segment(s: &str) -> bool {
    !s.is_empty()
        && s != "."
        && s != ".."
        && s
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_'))
}

impl fmt::Display for RepoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

impl FromStr for RepoId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s)?)
    }
}
