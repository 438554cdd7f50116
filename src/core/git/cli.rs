//! `git` executable backend.
//!
//! The token never appears in argv or in `.git/config`: it is handed to git
//! as an `http.extraHeader` through the `GIT_CONFIG_*` environment variables
//! (git 2.31+). Transfers slower than 1 byte/s for the configured timeout are
//! aborted via `http.lowSpeedLimit`/`http.lowSpeedTime`.

use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use std::time::Duration;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use tracing::{debug, trace};
use zeroize::Zeroizing;

use super::{Git, PushStatus, Signature};
use crate::error::{CommandFailed, GitError, Result};

/// Git backend that shells out to the `git` binary.
pub struct GitCli {
    program: Option<PathBuf>,
    auth_header: Zeroizing<String>,
    timeout: Duration,
}

impl std::fmt::Debug for GitCli {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitCli")
            .field("program", &self.program)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl GitCli {
    /// Locate `git` on PATH. A missing binary is only reported once a git
    /// operation is attempted, so secret-only callers can run without it.
    pub fn new(token: &str, timeout: Duration) -> Self {
        let program = which::which("git").ok();
        let credentials = STANDARD.encode(format!("x-access-token:{}", token));

        Self {
            program,
            auth_header: Zeroizing::new(format!("Authorization: Basic {}", credentials)),
            timeout,
        }
    }

    /// Base command with auth and transfer limits applied.
    fn command(&self, program: &Path, workdir: Option<&Path>) -> Command {
        let mut cmd = Command::new(program);
        if let Some(dir) = workdir {
            cmd.current_dir(dir);
        }

        let settings = [
            ("http.extraHeader", self.auth_header.as_str().to_string()),
            ("http.lowSpeedLimit", "1".to_string()),
            ("http.lowSpeedTime", self.timeout.as_secs().max(1).to_string()),
        ];
        cmd.env("GIT_CONFIG_COUNT", settings.len().to_string());
        for (i, (key, value)) in settings.iter().enumerate() {
            cmd.env(format!("GIT_CONFIG_KEY_{}", i), key);
            cmd.env(format!("GIT_CONFIG_VALUE_{}", i), value);
        }

        cmd.env("GIT_TERMINAL_PROMPT", "0")
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        cmd
    }

    fn run(&self, workdir: Option<&Path>, args: &[&str]) -> Result<Output> {
        let program = self.program.as_deref().ok_or(GitError::NotInstalled)?;
        trace!(?workdir, ?args, "running git");
        let output = self
            .command(program, workdir)
            .args(args)
            .output()
            .map_err(GitError::Spawn)?;
        Ok(output)
    }
}

fn failure(args: &[&str], output: &Output) -> CommandFailed {
    CommandFailed {
        command: args.join(" "),
        status: output.status.to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
    }
}

impl Git for GitCli {
    fn clone_repo(&self, url: &str, dest: &Path) -> Result<()> {
        debug!(url, dest = %dest.display(), "cloning");

        let dest_str = dest.to_string_lossy();
        let args = ["clone", "--quiet", url, dest_str.as_ref()];
        let output = self.run(None, &args)?;

        if !output.status.success() {
            return Err(GitError::Clone {
                repo: url.to_string(),
                source: failure(&args, &output),
            }
            .into());
        }
        Ok(())
    }

    fn stage(&self, workdir: &Path, path: &Path) -> Result<()> {
        let path_str = path.to_string_lossy();
        let args = ["add", "--", path_str.as_ref()];
        let output = self.run(Some(workdir), &args)?;

        if !output.status.success() {
            return Err(GitError::Stage {
                path: path_str.to_string(),
                source: failure(&args, &output),
            }
            .into());
        }
        Ok(())
    }

    fn commit(
        &self,
        workdir: &Path,
        path: &Path,
        message: &str,
        author: &Signature,
    ) -> Result<Option<String>> {
        let path_str = path.to_string_lossy();

        // exit 0: path unchanged in the index; exit 1: staged change
        let diff = ["diff", "--cached", "--quiet", "--", path_str.as_ref()];
        let output = self.run(Some(workdir), &diff)?;
        match output.status.code() {
            Some(0) => {
                debug!(workdir = %workdir.display(), path = %path_str, "nothing to commit");
                return Ok(None);
            }
            Some(1) => {}
            _ => {
                return Err(GitError::Commit {
                    workdir: workdir.to_path_buf(),
                    source: failure(&diff, &output),
                }
                .into())
            }
        }

        let name = format!("user.name={}", author.name);
        let email = format!("user.email={}", author.email);
        let author_arg = author.to_string();
        let args = [
            "-c",
            name.as_str(),
            "-c",
            email.as_str(),
            "-c",
            "commit.gpgsign=false",
            "commit",
            "--quiet",
            "--no-verify",
            "--author",
            author_arg.as_str(),
            "-m",
            message,
            "--only",
            "--",
            path_str.as_ref(),
        ];
        let output = self.run(Some(workdir), &args)?;
        if !output.status.success() {
            return Err(GitError::Commit {
                workdir: workdir.to_path_buf(),
                source: failure(&args, &output),
            }
            .into());
        }

        let rev = ["rev-parse", "HEAD"];
        let output = self.run(Some(workdir), &rev)?;
        if !output.status.success() {
            return Err(GitError::Commit {
                workdir: workdir.to_path_buf(),
                source: failure(&rev, &output),
            }
            .into());
        }

        let id = String::from_utf8_lossy(&output.stdout).trim().to_string();
        debug!(commit = %id, "committed");
        Ok(Some(id))
    }

    fn push(&self, workdir: &Path) -> Result<PushStatus> {
        let args = ["push", "--porcelain", "origin", "HEAD"];
        let output = self.run(Some(workdir), &args)?;

        if !output.status.success() {
            return Err(GitError::Push {
                workdir: workdir.to_path_buf(),
                source: failure(&args, &output),
            }
            .into());
        }

        let status = parse_push_status(&String::from_utf8_lossy(&output.stdout));
        debug!(?status, "pushed");
        Ok(status)
    }
}

/// Interpret `git push --porcelain` output. Ref lines start with a flag
/// character; `=` means the ref was already up to date.
fn parse_push_status(stdout: &str) -> PushStatus {
    let mut flags = stdout
        .lines()
        .filter(|l| l.contains('\t'))
        .filter_map(|l| l.chars().next());

    if flags.all(|flag| flag == '=') {
        PushStatus::UpToDate
    } else {
        PushStatus::Pushed
    }
}
