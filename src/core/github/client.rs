//! Blocking HTTP client for the GitHub REST API.

use std::time::Duration;

use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::header::ACCEPT;
use serde::Deserialize;
use tracing::debug;

use super::SecretsApi;
use crate::core::constants;
use crate::core::domain::{EncryptedSecret, RepoId, RepositoryPublicKey};
use crate::error::{RemoteError, Result};

/// GitHub REST client authenticated with a bearer token.
pub struct GitHubClient {
    client: Client,
    base_url: String,
    token: String,
}

impl std::fmt::Debug for GitHubClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitHubClient")
            .field("base_url", &self.base_url)
            .field("token", &"<redacted>")
            .finish()
    }
}

/// Error body returned by the API.
#[derive(Debug, Deserialize)]
struct ApiMessage {
    message: String,
}

impl GitHubClient {
    /// Create a client for `base_url` (e.g. `https://api.github.com`).
    ///
    /// # Errors
    ///
    /// Returns `RemoteError::Client` if the HTTP client cannot be built.
    pub fn new(base_url: &str, token: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(timeout)
            .user_agent(concat!("ghm/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(RemoteError::Client)?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
        })
    }

    fn secrets_url(&self, repo: &RepoId) -> String {
        format!(
            "{}/repos/{}/{}/actions/secrets",
            self.base_url,
            repo.owner(),
            repo.name()
        )
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .bearer_auth(&self.token)
            .header(ACCEPT, "application/vnd.github+json")
            .header("X-GitHub-Api-Version", constants::GITHUB_API_VERSION)
    }

    fn send(&self, url: &str, request: RequestBuilder) -> Result<Response> {
        let response = self
            .authorized(request)
            .send()
            .map_err(|source| RemoteError::Request {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        debug!(url, status = status.as_u16(), "github response");

        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().unwrap_or_default();
        let message = serde_json::from_str::<ApiMessage>(&body)
            .map(|m| m.message)
            .unwrap_or(body);

        Err(RemoteError::Status {
            url: url.to_string(),
            status: status.as_u16(),
            message,
        }
        .into())
    }
}

impl SecretsApi for GitHubClient {
    fn public_key(&self, repo: &RepoId) -> Result<RepositoryPublicKey> {
        let url = format!("{}/public-key", self.secrets_url(repo));
        debug!(repo = %repo, "fetching public key");

        let response = self.send(&url, self.client.get(&url))?;
        response
            .json::<RepositoryPublicKey>()
            .map_err(|e| {
                RemoteError::InvalidResponse {
                    url,
                    reason: e.to_string(),
                }
                .into()
            })
    }

    fn put_secret(&self, repo: &RepoId, name: &str, secret: &EncryptedSecret) -> Result<()> {
        let url = format!("{}/{}", self.secrets_url(repo), name);
        debug!(repo = %repo, name, key_id = %secret.key_id, "upserting secret");

        self.send(&url, self.client.put(&url).json(secret))?;
        Ok(())
    }
}
