use serde::{Deserialize, Serialize};

/// Numeric identifier the source-hosting service assigns to a repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RepositoryId(u64);

impl RepositoryId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }
}

impl From<u64> for RepositoryId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for RepositoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
