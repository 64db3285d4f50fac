use serde::{Deserialize, Serialize};

use crate::ids::RepositoryId;

/// Maximum number of topic labels shown per project.
pub const MAX_TOPIC_LABELS: usize = 5;

/// Repository as reported by the source-hosting service.
///
/// Owned by the remote service; this crate only filters and truncates
/// sequences of summaries, it never edits one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositorySummary {
    pub id: RepositoryId,
    pub name: String,
    pub description: Option<String>,
    pub url: String,
    pub topics: Option<Vec<String>>,
}

impl RepositorySummary {
    /// Topic labels to display: the first [`MAX_TOPIC_LABELS`] topics, none when absent.
    pub fn topic_labels(&self) -> &[String] {
        match &self.topics {
            Some(topics) => &topics[..topics.len().min(MAX_TOPIC_LABELS)],
            None => &[],
        }
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}
