//! Test support utilities for ghm integration tests.
//!
//! Provides isolated test environments, in-memory doubles for the GitHub API
//! and git, and helper commands.

#![allow(dead_code)]

pub mod commands;
pub mod fixtures;
pub mod mock;
pub mod skip;

#[allow(unused_imports)]
pub use fixtures::*;
#[allow(unused_imports)]
pub use mock::*;

use std::path::{Path, PathBuf};

use ghm::core::git::Git;
use ghm::core::github::SecretsApi;
use ghm::core::publish::Publisher;
use ghm::core::store::Store;
use tempfile::TempDir;

/// Test environment with isolated temp directories.
///
/// `dir` is the working directory commands run in; `state` holds the JSON
/// store. No process-global state is mutated, so tests run in parallel.
pub struct Test {
    /// Temporary working directory
    pub dir: TempDir,
    /// Temporary state directory
    pub state: TempDir,
}

impl Test {
    /// Create a new empty test environment.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        let state = TempDir::new().expect("failed to create temp state dir");

        Self { dir, state }
    }

    pub fn store(&self) -> Store {
        Store::new(self.state.path())
    }

    pub fn state_file(&self, name: &str) -> PathBuf {
        self.state.path().join(name)
    }

    /// Publisher over the given doubles, rooted at this environment.
    pub fn publisher<A: SecretsApi, G: Git>(&self, api: A, git: G) -> Publisher<A, G> {
        Publisher::new(api, git, self.store()).with_workspace(self.dir.path())
    }

    /// Read a state file as JSON.
    pub fn read_json(&self, name: &str) -> serde_json::Value {
        read_json(&self.state_file(name))
    }
}

pub fn read_json(path: &Path) -> serde_json::Value {
    let contents = std::fs::read_to_string(path).expect("failed to read state file");
    serde_json::from_str(&contents).expect("state file is not valid JSON")
}

/// Assert a record lists exactly `expected`, in order.
pub fn assert_names(actual: &[String], expected: &[&str]) {
    let actual: Vec<&str> = actual.iter().map(String::as_str).collect();
    assert_eq!(actual, expected);
}

/// Parse a finished command's stdout as JSON.
pub fn stdout_json(assert: &assert_cmd::assert::Assert) -> serde_json::Value {
    serde_json::from_slice(&assert.get_output().stdout).expect("stdout is not valid JSON")
}
