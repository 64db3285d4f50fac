//! Application configuration domain model

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

pub const DEFAULT_API_BASE_URL: &str = "https://api.github.com";
const DEFAULT_USER_AGENT: &str = "portfolio";

/// Application configuration
///
/// Every section and key is optional in the file; missing values take the
/// defaults below.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Project list source settings
    pub projects: ProjectsConfig,

    /// Preference storage settings
    pub preferences: PreferencesConfig,
}

/// Project list source configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectsConfig {
    /// Base URL of the GitHub REST API
    pub api_base_url: String,

    /// User-Agent header sent with the request (GitHub rejects requests without one)
    pub user_agent: String,
}

impl Default for ProjectsConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// Preference storage configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreferencesConfig {
    /// Preference file; `None` means `<app data>/preferences.json`
    pub path: Option<PathBuf>,
}
