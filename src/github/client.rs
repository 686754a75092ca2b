//! GitHub API client wrapper.

use serde_json::Value;
use tracing::{debug, instrument};

use crate::config::Config;
use crate::error::GithubError;

use super::types::{GithubRepo, ProjectSummary};

/// Client for the GitHub repository-listing endpoint.
///
/// Built once at startup and shared read-only with every request; the
/// underlying `reqwest::Client` pools connections internally.
#[derive(Debug, Clone)]
pub struct GithubClient {
    /// HTTP client for API requests.
    http: reqwest::Client,
    /// Fully-resolved repository listing URL for the configured user.
    repos_url: String,
}

impl GithubClient {
    /// Create a new GitHub client from config.
    pub fn new(config: &Config) -> Self {
        // GitHub rejects requests without a User-Agent.
        let http = reqwest::Client::builder()
            .user_agent(concat!("neoncity-api/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("failed to create HTTP client");

        Self {
            http,
            repos_url: config.repos_url(),
        }
    }

    /// Fetch the configured user's repositories, most recently updated first.
    ///
    /// Returns one [`ProjectSummary`] per repository in upstream order. A
    /// non-array JSON body yields an empty list rather than an error; any
    /// other failure surfaces as [`GithubError`] for the handler to collapse
    /// into the sentinel.
    #[instrument(skip(self), fields(url = %self.repos_url))]
    pub async fn fetch_projects(&self) -> Result<Vec<ProjectSummary>, GithubError> {
        let response = self
            .http
            .get(&self.repos_url)
            .query(&[("sort", "updated"), ("direction", "desc")])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(GithubError::Status { status });
        }

        let root: Value = serde_json::from_str(&response.text().await?)?;
        if !root.is_array() {
            debug!("GitHub response body is not a JSON array, returning empty list");
            return Ok(Vec::new());
        }

        let repos: Vec<GithubRepo> = serde_json::from_value(root)?;
        debug!(count = repos.len(), "Fetched repositories");

        Ok(repos.into_iter().map(ProjectSummary::from).collect())
    }
}
