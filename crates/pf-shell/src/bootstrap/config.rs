//! # Configuration Loader
//!
//! Reads the TOML config file into [`AppConfig`]. Loading is pure: keys the
//! file leaves out take their defaults, and values are accepted as written.

use anyhow::Context;
use pf_core::app_dirs::AppDirs;
use pf_core::config::AppConfig;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Load configuration from a TOML file.
///
/// # Errors
/// Fails when the file cannot be read or is not valid TOML for [`AppConfig`].
pub fn load_config(config_path: impl AsRef<Path>) -> anyhow::Result<AppConfig> {
    let config_path = config_path.as_ref();
    let content = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", config_path.display()))
}

/// Pick the configuration for this run.
///
/// An explicit path must exist. Without one, `<app data>/config.toml` is used
/// when present and the built-in defaults otherwise.
pub fn resolve_config(explicit: Option<PathBuf>, app_dirs: &AppDirs) -> anyhow::Result<AppConfig> {
    if let Some(path) = explicit {
        return load_config(path);
    }

    let default_path = app_dirs.config_path();
    if default_path.is_file() {
        debug!(path = %default_path.display(), "Loading config from app data dir");
        return load_config(default_path);
    }

    debug!("No config file found, using defaults");
    Ok(AppConfig::default())
}
