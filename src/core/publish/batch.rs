//! Batch apply of saved secrets and workflows.
//!
//! Each item is published independently. A failing item is logged and
//! skipped; the batch itself never fails.

use tracing::{info, warn};

use super::{Operation, Publisher};
use crate::core::git::Git;
use crate::core::github::SecretsApi;
use crate::error::Result;

/// An item the batch could not apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skipped {
    pub name: String,
    pub reason: String,
}

/// What a batch applied and what it skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub applied: Vec<String>,
    pub skipped: Vec<Skipped>,
}

impl BatchReport {
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }
}

impl<A: SecretsApi, G: Git> Publisher<A, G> {
    /// Publish saved secrets to `repo`, best effort.
    pub fn add_secrets_to_repo(&self, repo: &str, names: &[String]) -> BatchReport {
        self.apply_saved(repo, names, |name| {
            let secret = self.store.secret(name)?;
            Ok(Operation::SecretPublish {
                repo: repo.to_string(),
                secret,
            })
        })
    }

    /// Publish saved workflows to `repo`, best effort.
    pub fn add_workflows_to_repo(&self, repo: &str, names: &[String]) -> BatchReport {
        self.apply_saved(repo, names, |name| {
            let workflow = self.store.workflow(name)?;
            Ok(Operation::WorkflowPublish {
                repo: repo.to_string(),
                workflow,
            })
        })
    }

    fn apply_saved<F>(&self, repo: &str, names: &[String], lookup: F) -> BatchReport
    where
        F: Fn(&str) -> Result<Operation>,
    {
        let mut report = BatchReport::default();

        for name in names {
            match lookup(name.as_str()).and_then(|op| self.execute(op)) {
                Ok(_) => {
                    info!(repo, name = %name, "applied");
                    report.applied.push(name.clone());
                }
                Err(e) => {
                    warn!(repo, name = %name, error = %e, "skipping");
                    report.skipped.push(Skipped {
                        name: name.clone(),
                        reason: e.to_string(),
                    });
                }
            }
        }

        report
    }
}
