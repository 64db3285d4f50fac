use async_trait::async_trait;

use crate::project::{ProjectLoadError, RepositorySummary};

/// Read-only source of the portfolio account's repositories.
///
/// Implementations issue exactly one request per call and return the
/// repositories in the order the service reports them.
#[async_trait]
pub trait RepositorySourcePort: Send + Sync {
    async fn list_repositories(&self) -> Result<Vec<RepositorySummary>, ProjectLoadError>;
}
