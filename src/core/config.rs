//! Configuration file management.
//!
//! Handles reading, writing, and validating `.ghm.toml`. The file is owned by
//! the caller (the CLI); the core only ever sees the values passed into it.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

use crate::core::constants;
use crate::error::{ConfigError, Result};

/// Contents of `.ghm.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub github: GitHubConfig,
    #[serde(default)]
    pub state: StateConfig,
}

/// `[github]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitHubConfig {
    /// Personal access token. `GITHUB_TOKEN` or `--token` take precedence.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// REST API base URL.
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Base URL clone URLs are built from.
    #[serde(default = "default_git_url")]
    pub git_url: String,
    /// Timeout for API requests and git transfers, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// `[state]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateConfig {
    /// Directory holding `secrets.json`, `workflows.json` and `repos.json`.
    #[serde(default = "default_state_dir")]
    pub dir: PathBuf,
}

fn default_api_url() -> String {
    constants::DEFAULT_API_URL.to_string()
}

fn default_git_url() -> String {
    constants::DEFAULT_GIT_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    constants::DEFAULT_TIMEOUT_SECS
}

fn default_state_dir() -> PathBuf {
    PathBuf::from(".")
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            token: None,
            api_url: default_api_url(),
            git_url: default_git_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for StateConfig {
    fn default() -> Self {
        Self {
            dir: default_state_dir(),
        }
    }
}

impl Config {
    /// Path to the configuration file in the current directory.
    pub fn config_path() -> PathBuf {
        PathBuf::from(constants::CONFIG_FILE)
    }

    /// Check if a configuration file exists in the current directory.
    pub fn exists() -> bool {
        Self::config_path().exists()
    }

    /// Load `.ghm.toml` from the current directory, or defaults if absent.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` if the TOML is malformed, or a validation
    /// error if a value is out of range.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load from an explicit path, or defaults if the file does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading config");

        if !path.exists() {
            debug!("no config file, using defaults");
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        let config: Self = toml::from_str(&contents).map_err(ConfigError::Parse)?;
        config.validate()?;

        Ok(config)
    }

    /// Save to `.ghm.toml` in the current directory.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    /// Save to an explicit path. The file may hold a token, so it is
    /// restricted to the owner on Unix.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        debug!(path = %path.display(), "saving config");

        let contents = toml::to_string_pretty(self).map_err(ConfigError::Serialize)?;
        std::fs::write(path, contents).map_err(ConfigError::WriteFile)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600))
                .map_err(ConfigError::WriteFile)?;
        }

        Ok(())
    }

    /// Configured token, ignoring blank values.
    pub fn token(&self) -> Option<&str> {
        self.github
            .token
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.github.timeout_secs)
    }

    /// Set a value by its dotted key, as used by `store-config`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::UnknownKey` for unsupported keys and
    /// `ConfigError::InvalidValue` if the value does not parse or validate.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let value = value.trim();
        match key {
            "github_token" | "github.token" => {
                self.github.token = Some(value.to_string());
            }
            "github.api_url" => self.github.api_url = value.to_string(),
            "github.git_url" => self.github.git_url = value.to_string(),
            "github.timeout_secs" => {
                self.github.timeout_secs =
                    value.parse().map_err(|_| ConfigError::InvalidValue {
                        field: "github.timeout_secs",
                        reason: format!("not a number: {}", value),
                    })?;
            }
            "state.dir" => self.state.dir = PathBuf::from(value),
            other => return Err(ConfigError::UnknownKey(other.to_string()).into()),
        }
        self.validate()
    }

    /// Validate value ranges and URL schemes.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` on the first offending field.
    pub fn validate(&self) -> Result<()> {
        debug!("validating config");

        if self.github.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "github.timeout_secs",
                reason: "must be greater than zero".to_string(),
            }
            .into());
        }

        check_url("github.api_url", &self.github.api_url, &["http://", "https://"])?;
        check_url(
            "github.git_url",
            &self.github.git_url,
            &["http://", "https://", "file://"],
        )?;

        if self.state.dir.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "state.dir",
                reason: "must not be empty".to_string(),
            }
            .into());
        }

        Ok(())
    }
}

fn check_url(field: &'static str, url: &str, schemes: &[&str]) -> Result<()> {
    if schemes.iter().any(|s| url.starts_with(s)) {
        Ok(())
    } else {
        Err(ConfigError::InvalidValue {
            field,
            reason: format!("expected a URL starting with {}: {}", schemes.join(" or "), url),
        }
        .into())
    }
}
