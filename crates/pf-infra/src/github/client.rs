use anyhow::{Context, Result};
use async_trait::async_trait;
use pf_core::config::ProjectsConfig;
use pf_core::ports::RepositorySourcePort;
use pf_core::project::{ProjectLoadError, RepositorySummary, PORTFOLIO_ACCOUNT};
use reqwest::header::ACCEPT;
use tracing::{debug, info_span, Instrument};

use super::types::GitHubRepoDto;

const GITHUB_JSON: &str = "application/vnd.github+json";

/// Reads the portfolio account's repositories from the GitHub REST API.
///
/// One `GET {base}/users/{account}/repos?sort=updated` per call, no
/// authentication, no pagination; the service's default page is the list.
pub struct GitHubRepositorySource {
    http: reqwest::Client,
    base_url: String,
}

impl GitHubRepositorySource {
    /// Build a source with its own HTTP client.
    ///
    /// # Errors
    /// Fails if the TLS backend cannot be initialised.
    pub fn new(config: &ProjectsConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .build()
            .context("build GitHub HTTP client failed")?;
        Ok(Self {
            http,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn endpoint(&self) -> String {
        format!(
            "{}/users/{}/repos?sort=updated",
            self.base_url, PORTFOLIO_ACCOUNT
        )
    }
}

#[async_trait]
impl RepositorySourcePort for GitHubRepositorySource {
    async fn list_repositories(&self) -> Result<Vec<RepositorySummary>, ProjectLoadError> {
        let url = self.endpoint();
        let span = info_span!("infra.github.list_repositories", url = %url);

        async {
            let response = self
                .http
                .get(&url)
                .header(ACCEPT, GITHUB_JSON)
                .send()
                .await
                .map_err(|e| ProjectLoadError::Transport(e.to_string()))?;

            let status = response.status();
            debug!(status = status.as_u16(), "GitHub responded");
            if !status.is_success() {
                return Err(ProjectLoadError::HttpStatus {
                    status: status.as_u16(),
                });
            }

            // Read the body first so a dropped connection stays a transport
            // error and only bad JSON becomes a parse error.
            let body = response
                .text()
                .await
                .map_err(|e| ProjectLoadError::Transport(e.to_string()))?;
            let repos: Vec<GitHubRepoDto> = serde_json::from_str(&body)
                .map_err(|e| ProjectLoadError::Parse(e.to_string()))?;

            debug!(count = repos.len(), "Parsed repository list");
            Ok(repos.into_iter().map(RepositorySummary::from).collect())
        }
        .instrument(span)
        .await
    }
}
