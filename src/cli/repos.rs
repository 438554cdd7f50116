//! list-repos command.

use crate::cli::context::Context;
use crate::cli::output;
use crate::error::Result;

/// Show every repository in `repos.json`.
pub fn list(json: bool) -> Result<()> {
    let repos = Context::load()?.store().repositories()?;

    if json {
        output::data(&serde_json::to_string_pretty(&repos)?);
        return Ok(());
    }

    if repos.repositories.is_empty() {
        output::dimmed("no repositories recorded yet");
        return Ok(());
    }

    output::header(&format!(
        "{} repositories",
        output::count(repos.repositories.len())
    ));
    output::rule();
    for (name, record) in &repos.repositories {
        output::blank();
        output::header(&output::key(name));
        output::kv(
            "updated  ",
            record.last_update.format("%Y-%m-%d %H:%M UTC"),
        );
        output::kv("secrets  ", join_or_dash(&record.secrets));
        output::kv("workflows", join_or_dash(&record.workflows));
    }

    Ok(())
}

fn join_or_dash(items: &[String]) -> String {
    if items.is_empty() {
        "-".to_string()
    } else {
        items.join(", ")
    }
}
