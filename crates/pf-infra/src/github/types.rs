//! GitHub API data types.

use pf_core::ids::RepositoryId;
use pf_core::project::RepositorySummary;
use serde::Deserialize;

/// Repository object from `GET /users/{user}/repos`.
///
/// Only the fields the portfolio shows; everything else in the payload is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct GitHubRepoDto {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub html_url: String,
    #[serde(default)]
    pub topics: Option<Vec<String>>,
}

impl From<GitHubRepoDto> for RepositorySummary {
    fn from(dto: GitHubRepoDto) -> Self {
        Self {
            id: RepositoryId::new(dto.id),
            name: dto.name,
            description: dto.description,
            url: dto.html_url,
            topics: dto.topics,
        }
    }
}
