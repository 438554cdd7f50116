//! Core library components.
//!
//! Everything here is usable without the CLI: the publish pipelines take
//! their collaborators ([`github::SecretsApi`], [`git::Git`], [`store::Store`])
//! as values, so callers and tests choose the implementations.

pub mod cipher;
pub mod config;
pub mod constants;
pub mod domain;
pub mod git;
pub mod github;
pub mod publish;
pub mod store;
pub mod types;
pub mod validation;
