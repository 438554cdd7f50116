//! Secret commands (add-secret, add-saved-secrets).

use std::io::{self, IsTerminal};

use dialoguer::Password;
use tracing::info;
use zeroize::Zeroizing;

use crate::cli::context::Context;
use crate::cli::{output, select};
use crate::core::publish::BatchReport;
use crate::core::validation;
use crate::error::Result;

/// Encrypt and publish one secret.
pub fn add(repo: &str, name: &str, value: Option<String>, token: Option<String>) -> Result<()> {
    info!("Adding secret {} to {}", name, repo);

    validation::validate_repo(repo)?;
    validation::validate_secret_name(name)?;

    let value = match value {
        Some(v) => Zeroizing::new(v),
        None => read_value(name)?,
    };

    let publisher = Context::load()?.publisher(token)?;

    output::progress(&format!("publishing {}", name));
    let result = publisher.add_secret(repo, name, &value);
    output::progress_done(result.is_ok());
    let published = result?;

    output::success(&format!(
        "published {} to {}",
        output::key(&published.name),
        output::key(&published.repo.to_string())
    ));
    Ok(())
}

/// Publish saved secrets, skipping any that fail.
pub fn add_saved(repo: &str, names: Vec<String>, all: bool, token: Option<String>) -> Result<()> {
    validation::validate_repo(repo)?;

    let ctx = Context::load()?;
    let available = ctx.store().secret_names()?;
    if names.is_empty() && available.is_empty() {
        output::dimmed("no saved secrets");
        return Ok(());
    }

    let names = select::choose("secret names", names, all, available)?;
    if names.is_empty() {
        output::dimmed("no secrets selected");
        return Ok(());
    }

    let publisher = ctx.publisher(token)?;
    let report = publisher.add_secrets_to_repo(repo, &names);
    print_report(repo, "secrets", &report);
    Ok(())
}

/// Read a secret value from piped stdin or a hidden prompt.
fn read_value(name: &str) -> Result<Zeroizing<String>> {
    if !io::stdin().is_terminal() {
        let mut input = Zeroizing::new(String::new());
        io::stdin().read_line(&mut input)?;
        return Ok(Zeroizing::new(input.trim().to_string()));
    }

    let value = Password::new()
        .with_prompt(format!("Value for {}", output::key(name)))
        .interact()?;
    Ok(Zeroizing::new(value))
}

/// Summarise a batch run.
pub(crate) fn print_report(repo: &str, kind: &str, report: &BatchReport) {
    for name in &report.applied {
        output::success(&format!("{} -> {}", output::key(name), output::key(repo)));
    }
    for skipped in &report.skipped {
        output::warn(&format!("skipped {}: {}", skipped.name, skipped.reason));
    }

    output::blank();
    output::kv(
        kind,
        format!(
            "{} applied, {} skipped",
            output::count(report.applied.len()),
            output::count(report.skipped.len())
        ),
    );
}
