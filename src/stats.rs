use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// An `owner/name` pair identifying one repository on the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoRef {
    pub owner: String,
    pub name: String,
}

impl RepoRef {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("expected `owner/name`, got `{0}`")]
pub struct ParseRepoRefError(String);

impl FromStr for RepoRef {
    type Err = ParseRepoRefError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().split_once('/') {
            Some((owner, name))
                if !owner.is_empty() && !name.is_empty() && !name.contains('/') =>
            {
                Ok(Self::new(owner, name))
            }
            _ => Err(ParseRepoRefError(s.to_string())),
        }
    }
}

impl fmt::Display for RepoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// Public metadata of one repository, projected from `GET /repos/{owner}/{repo}`.
///
/// Every key must be present in the response. `description` may be `null`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RepositoryStats {
    pub name: String,
    #[serde(deserialize_with = "Option::deserialize")]
    pub description: Option<String>,
    #[serde(rename = "stargazers_count")]
    pub stars: u64,
    #[serde(rename = "forks_count")]
    pub forks: u64,
    #[serde(rename = "open_issues_count")]
    pub open_issues: u64,
    /// Passed through as the API sent it.
    #[serde(rename = "updated_at")]
    pub last_update: String,
}

/// A fetched record together with the pair it was fetched for.
#[derive(Debug, Clone)]
pub struct TrackedRepo {
    pub repo: RepoRef,
    pub stats: RepositoryStats,
}
