//! Command helper methods for Test.
//!
//! Shortcuts return an unchecked [`Assert`]; callers chain `.success()` or
//! `.failure()` and their output predicates.

use super::Test;
use assert_cmd::assert::Assert;
use assert_cmd::Command;

impl Test {
    /// Create a ghm command isolated from the caller's environment.
    ///
    /// Returns a Command with:
    /// - current directory set to the test working directory
    /// - `GITHUB_TOKEN` and `GHM_LOG` removed
    /// - `NO_COLOR` set so output is plain text
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("ghm").expect("failed to find ghm binary");
        cmd.current_dir(self.dir.path());
        cmd.env_remove("GITHUB_TOKEN");
        cmd.env_remove("GHM_LOG");
        cmd.env("NO_COLOR", "1");
        cmd
    }

    /// `ghm store-config -k <key> -v <value>`
    pub fn store_config(&self, key: &str, value: &str) -> Assert {
        self.cmd()
            .args(["store-config", "-k", key, "-v", value])
            .assert()
    }

    /// Point the state directory at this environment's `state` dir.
    pub fn use_state_dir(&self) {
        let dir = self.state.path().to_string_lossy().to_string();
        self.store_config("state.dir", &dir).success();
    }

    pub fn list_repos(&self) -> Assert {
        self.cmd().arg("list-repos").assert()
    }

    pub fn list_repos_json(&self) -> Assert {
        self.cmd().args(["list-repos", "--json"]).assert()
    }

    /// `ghm add-secret` with an explicit value.
    pub fn add_secret(&self, repo: &str, name: &str, value: &str) -> Assert {
        self.cmd()
            .args(["add-secret", "-r", repo, "-n", name, "-v", value])
            .assert()
    }

    /// `ghm add-workflow` with inline content.
    pub fn add_workflow(&self, repo: &str, name: &str, content: &str) -> Assert {
        self.cmd()
            .args(["add-workflow", "-r", repo, "-n", name, "-c", content])
            .assert()
    }
}
