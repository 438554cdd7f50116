//! Per-repository sync record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What has been applied to one repository.
///
/// Names are weak references into the saved secrets/workflows maps and are
/// kept as an ordered set: re-applying an item refreshes `last_update`
/// without appending a duplicate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryRecord {
    #[serde(default)]
    pub secrets: Vec<String>,
    #[serde(default)]
    pub workflows: Vec<String>,
    pub last_update: DateTime<Utc>,
}

impl RepositoryRecord {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            secrets: Vec::new(),
            workflows: Vec::new(),
            last_update: now,
        }
    }

    /// Record a secret as applied.
    pub fn add_secret(&mut self, name: &str, now: DateTime<Utc>) {
        push_unique(&mut self.secrets, name);
        self.last_update = now;
    }

    /// Record a workflow as applied.
    pub fn add_workflow(&mut self, name: &str, now: DateTime<Utc>) {
        push_unique(&mut self.workflows, name);
        self.last_update = now;
    }
}

fn push_unique(names: &mut Vec<String>, name: &str) {
    if !names.iter().any(|n| n == name) {
        names.push(name.to_string());
    }
}
