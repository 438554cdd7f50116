//! ghm - Push GitHub Actions secrets and workflows from the command line.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use ghm::cli::output;
use ghm::cli::{execute, Cli};
use ghm::error::{ConfigError, Error, GitError, ValidationError};

fn main() {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_env("GHM_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("ghm=debug")
        } else {
            EnvFilter::new("ghm=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).without_time())
        .init();

    if let Err(e) = execute(cli) {
        let suggestion = match &e {
            Error::Config(ConfigError::MissingToken) => {
                Some("pass --token, set GITHUB_TOKEN, or run: ghm store-config -k github_token -v <token>")
            }
            Error::Config(ConfigError::UnknownKey(_)) => Some(
                "keys: github_token, github.api_url, github.git_url, github.timeout_secs, state.dir",
            ),
            Error::Validation(ValidationError::InvalidRepoFormat(_)) => {
                Some("repositories are written as owner/name, e.g. acme/widgets")
            }
            Error::Validation(ValidationError::InvalidSecretName(_)) => Some(
                "secret names use letters, digits and '_', and must not start with a digit or GITHUB_",
            ),
            Error::Git(GitError::NotInstalled) => Some("install git and make sure it is on PATH"),
            _ => None,
        };

        let message = e.to_string();
        output::error(&message);
        let mut source = std::error::Error::source(&e);
        while let Some(cause) = source {
            let cause_text = cause.to_string();
            if !message.contains(&cause_text) {
                output::cause(&cause_text);
            }
            source = cause.source();
        }
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
