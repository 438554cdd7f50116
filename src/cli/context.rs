//! Shared command setup: config, token resolution, publisher construction.

use std::io::{self, IsTerminal};

use dialoguer::Password;
use tracing::debug;
use zeroize::Zeroizing;

use crate::cli::output;
use crate::core::config::Config;
use crate::core::git::GitCli;
use crate::core::github::GitHubClient;
use crate::core::publish::Publisher;
use crate::core::store::Store;
use crate::error::{ConfigError, Result};

/// Publisher wired to the real GitHub API and `git` binary.
pub type LivePublisher = Publisher<GitHubClient, GitCli>;

/// Configuration loaded for a single command.
pub struct Context {
    config: Config,
}

impl Context {
    /// Load `.ghm.toml` from the current directory.
    pub fn load() -> Result<Self> {
        Ok(Self {
            config: Config::load()?,
        })
    }

    pub fn store(&self) -> Store {
        Store::new(self.config.state.dir.clone())
    }

    /// Build a publisher, resolving the token from `flag` first, then the
    /// config file, then an interactive prompt.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingToken` when no token is available and
    /// stdin is not a terminal.
    pub fn publisher(mut self, flag: Option<String>) -> Result<LivePublisher> {
        let token = self.resolve_token(flag)?;
        let timeout = self.config.timeout();

        let api = GitHubClient::new(&self.config.github.api_url, &token, timeout)?;
        let git = GitCli::new(&token, timeout);
        let workspace = std::env::current_dir()?;

        Ok(Publisher::new(api, git, self.store())
            .with_workspace(workspace)
            .with_git_url(self.config.github.git_url.clone()))
    }

    fn resolve_token(&mut self, flag: Option<String>) -> Result<Zeroizing<String>> {
        if let Some(token) = flag.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
            debug!("using token from --token/GITHUB_TOKEN");
            return Ok(Zeroizing::new(token.to_string()));
        }

        if let Some(token) = self.config.token() {
            debug!("using token from config");
            return Ok(Zeroizing::new(token.to_string()));
        }

        if !io::stdin().is_terminal() {
            return Err(ConfigError::MissingToken.into());
        }

        let input = Zeroizing::new(
            Password::new()
                .with_prompt("GitHub token")
                .interact()?,
        );
        let token = input.trim();
        if token.is_empty() {
            return Err(ConfigError::MissingToken.into());
        }

        self.config.github.token = Some(token.to_string());
        self.config.save()?;
        output::success(&format!("token saved to {}", Config::config_path().display()));

        Ok(Zeroizing::new(token.to_string()))
    }
}
