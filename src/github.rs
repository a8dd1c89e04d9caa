use crate::stats::{RepoRef, RepositoryStats};
use anyhow::{Context, Result, bail};
use reqwest::{Client, StatusCode, Url, redirect};
use thiserror::Error;
use tracing::debug;

const USER_AGENT: &str = concat!("repo-tracker/", env!("CARGO_PKG_VERSION"));

/// Why a repository could not be turned into a [`RepositoryStats`].
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("{0}")]
    Status(u16),

    #[error("network unreachable ({0})")]
    Network(#[source] reqwest::Error),

    #[error("unexpected response body for {repo}: {source}")]
    Schema {
        repo: String,
        #[source]
        source: serde_json::Error,
    },
}

impl FetchError {
    /// Schema mismatches abort the run; everything else skips the repository.
    pub fn is_fatal(&self) -> bool {
        matches!(self, FetchError::Schema { .. })
    }
}

pub struct GithubClient {
    api_base: Url,
    http: Client,
}

impl GithubClient {
    /// Create a REST client rooted at `api_base` (e.g. `https://api.github.com`).
    pub fn new(api_base: &str) -> Result<Self> {
        let api_base =
            Url::parse(api_base).with_context(|| format!("Invalid API base URL `{api_base}`"))?;
        if api_base.cannot_be_a_base() {
            bail!("API base URL `{api_base}` cannot carry a path");
        }

        let http = Client::builder()
            .user_agent(USER_AGENT)
            .redirect(redirect::Policy::none())
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { api_base, http })
    }

    /// `{api_base}/repos/{owner}/{name}` with each part percent-encoded as one segment.
    pub fn repo_url(&self, repo: &RepoRef) -> Url {
        let mut url = self.api_base.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .extend(["repos", repo.owner.as_str(), repo.name.as_str()]);
        }
        url
    }

    /// Single unauthenticated `GET /repos/{owner}/{repo}`. Only `200 OK` counts as success.
    pub async fn repo_stats(&self, repo: &RepoRef) -> Result<RepositoryStats, FetchError> {
        let url = self.repo_url(repo);
        debug!(%url, "requesting repository");

        let resp = self
            .http
            .get(url)
            .send()
            .await
            .map_err(FetchError::Network)?;
        let status = resp.status();
        debug!(%repo, status = status.as_u16(), "received response");

        if status != StatusCode::OK {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = resp.text().await.map_err(FetchError::Network)?;
        serde_json::from_str(&body).map_err(|source| FetchError::Schema {
            repo: repo.to_string(),
            source,
        })
    }
}
