//! Choosing saved items for the batch commands.

use std::io::{self, IsTerminal};

use dialoguer::MultiSelect;

use crate::error::{Result, ValidationError};

/// Resolve which saved items to publish.
///
/// Explicit `names` win. With `all`, every saved item is used. Otherwise the
/// user picks from `available` on a terminal; without one, `field` is
/// reported missing.
pub fn choose(
    field: &'static str,
    names: Vec<String>,
    all: bool,
    available: Vec<String>,
) -> Result<Vec<String>> {
    if !names.is_empty() {
        return Ok(names);
    }
    if all || available.is_empty() {
        return Ok(available);
    }
    if !io::stdin().is_terminal() {
        return Err(ValidationError::MissingField(field).into());
    }

    let picked = MultiSelect::new()
        .with_prompt(format!("Select {} (space to toggle, enter to confirm)", field))
        .items(&available)
        .interact()?;

    Ok(picked
        .into_iter()
        .filter_map(|i| available.get(i).cloned())
        .collect())
}
