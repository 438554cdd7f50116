//! store-config command.

use tracing::info;

use crate::cli::output;
use crate::core::config::Config;
use crate::error::Result;

/// Set one key in `.ghm.toml`, creating the file if needed.
pub fn store(key: &str, value: &str) -> Result<()> {
    info!("Storing config key {}", key);

    let mut config = Config::load()?;
    config.set(key, value)?;
    config.save()?;

    output::success(&format!(
        "saved {} to {}",
        output::key(key),
        Config::config_path().display()
    ));
    Ok(())
}
