//! Workflow commands (add-workflow, add-saved-workflows).

use std::path::PathBuf;

use tracing::info;

use super::secret::print_report;
use crate::cli::context::Context;
use crate::cli::{output, select};
use crate::core::git::PushStatus;
use crate::core::validation;
use crate::error::Result;

/// Commit and push one workflow file.
pub fn add(
    repo: &str,
    name: &str,
    content: Option<String>,
    file: Option<PathBuf>,
    token: Option<String>,
) -> Result<()> {
    info!("Adding workflow {} to {}", name, repo);

    validation::validate_repo(repo)?;
    validation::validate_workflow_name(name)?;

    let content = match (content, file) {
        (Some(content), _) => content,
        (None, Some(path)) => std::fs::read_to_string(&path)?,
        (None, None) => String::new(),
    };
    validation::require("workflow content", &content)?;

    let publisher = Context::load()?.publisher(token)?;

    output::progress(&format!("publishing {}", name));
    let result = publisher.add_workflow(repo, name, &content);
    output::progress_done(result.is_ok());
    let published = result?;

    match (&published.commit, published.push) {
        (None, PushStatus::UpToDate) => output::success(&format!(
            "{} already up to date in {}",
            output::key(&published.name),
            output::key(&published.repo.to_string())
        )),
        _ => output::success(&format!(
            "published {} to {}",
            output::key(&published.name),
            output::key(&published.repo.to_string())
        )),
    }
    if let Some(commit) = &published.commit {
        output::kv("commit", commit);
    }
    Ok(())
}

/// Publish saved workflows, skipping any that fail.
pub fn add_saved(repo: &str, names: Vec<String>, all: bool, token: Option<String>) -> Result<()> {
    validation::validate_repo(repo)?;

    let ctx = Context::load()?;
    let available = ctx.store().workflow_names()?;
    if names.is_empty() && available.is_empty() {
        output::dimmed("no saved workflows");
        return Ok(());
    }

    let names = select::choose("workflow names", names, all, available)?;
    if names.is_empty() {
        output::dimmed("no workflows selected");
        return Ok(());
    }

    let publisher = ctx.publisher(token)?;
    let report = publisher.add_workflows_to_repo(repo, &names);
    print_report(repo, "workflows", &report);
    Ok(())
}
