use serde::Serialize;

use super::repository::RepositorySummary;

/// Maximum number of projects shown.
pub const MAX_DISPLAY_ITEMS: usize = 6;

/// Bounded, ordered list of repositories shown to the user.
///
/// Built by truncating whatever the remote call returned, preserving the
/// remote order (most recently updated first). A new load replaces the whole
/// list; there is no way to append to one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DisplayList(Vec<RepositorySummary>);

impl DisplayList {
    pub fn from_remote(mut repos: Vec<RepositorySummary>) -> Self {
        repos.truncate(MAX_DISPLAY_ITEMS);
        Self(repos)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RepositorySummary> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a DisplayList {
    type Item = &'a RepositorySummary;
    type IntoIter = std::slice::Iter<'a, RepositorySummary>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
