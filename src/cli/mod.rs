//! Command-line interface.

pub mod completions;
pub mod config;
pub mod context;
pub mod output;
pub mod repos;
pub mod secret;
pub mod select;
pub mod workflow;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// ghm - Push GitHub Actions secrets and workflows from the command line.
#[derive(Parser)]
#[command(
    name = "ghm",
    about = "Push GitHub Actions secrets and workflows from the command line",
    version
)]
pub struct Cli {
    /// Enable debug logging (GHM_LOG takes precedence)
    #[arg(long, global = true)]
    pub verbose: bool,

    /// GitHub token; falls back to .ghm.toml
    #[arg(long, global = true, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Encrypt and publish an Actions secret to a repository
    AddSecret {
        /// Target repository (owner/repo)
        #[arg(short, long)]
        repo: String,
        /// Secret name (e.g., API_KEY)
        #[arg(short, long)]
        name: String,
        /// Secret value; read from stdin or a hidden prompt when omitted
        #[arg(short, long)]
        value: Option<String>,
    },

    /// Commit and push a workflow file to a repository
    AddWorkflow {
        /// Target repository (owner/repo)
        #[arg(short, long)]
        repo: String,
        /// Workflow file name (e.g., ci.yml)
        #[arg(short, long)]
        name: String,
        /// Workflow YAML content
        #[arg(short, long, conflicts_with = "file", required_unless_present = "file")]
        content: Option<String>,
        /// Read workflow content from a file
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Publish previously saved secrets to a repository
    AddSavedSecrets {
        /// Target repository (owner/repo)
        #[arg(short, long)]
        repo: String,
        /// Publish every saved secret
        #[arg(long, conflicts_with = "names")]
        all: bool,
        /// Saved secret names; prompts for a selection when omitted
        names: Vec<String>,
    },

    /// Publish previously saved workflows to a repository
    AddSavedWorkflows {
        /// Target repository (owner/repo)
        #[arg(short, long)]
        repo: String,
        /// Publish every saved workflow
        #[arg(long, conflicts_with = "names")]
        all: bool,
        /// Saved workflow names; prompts for a selection when omitted
        names: Vec<String>,
    },

    /// List repositories and what has been published to them
    ListRepos {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Set a value in .ghm.toml
    StoreConfig {
        /// Config key (e.g., github_token, github.timeout_secs)
        #[arg(short, long)]
        key: String,
        /// Config value
        #[arg(short, long)]
        value: String,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Execute a parsed command line.
pub fn execute(cli: Cli) -> crate::error::Result<()> {
    use Command::*;

    let token = cli.token;
    match cli.command {
        AddSecret { repo, name, value } => secret::add(&repo, &name, value, token),
        AddWorkflow {
            repo,
            name,
            content,
            file,
        } => workflow::add(&repo, &name, content, file, token),
        AddSavedSecrets { repo, all, names } => secret::add_saved(&repo, names, all, token),
        AddSavedWorkflows { repo, all, names } => workflow::add_saved(&repo, names, all, token),
        ListRepos { json } => repos::list(json),
        StoreConfig { key, value } => config::store(&key, &value),
        Completions { shell } => completions::execute(shell),
    }
}
