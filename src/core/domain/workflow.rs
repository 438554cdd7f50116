//! Workflow type.

use crate::core::types::WorkflowName;

/// A saved workflow file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workflow {
    name: WorkflowName,
    content: String,
}

impl Workflow {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    /// File name under `.github/workflows/`.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

impl std::fmt::Display for Workflow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
