use std::path::PathBuf;

use pf_core::app_dirs::AppDirs;
use pf_core::ports::{AppDirsError, AppDirsPort};

const APP_DIR_NAME: &str = "portfolio";
const PROFILE_ENV: &str = "PF_PROFILE";

/// `portfolio`, or `portfolio-<profile>` when a non-empty profile is given.
fn app_dir_name(profile: Option<&str>) -> String {
    match profile.map(str::trim) {
        Some(profile) if !profile.is_empty() => format!("{APP_DIR_NAME}-{profile}"),
        _ => APP_DIR_NAME.to_string(),
    }
}

/// Resolves the app data directory from the platform's data-local dir.
#[derive(Debug, Default)]
pub struct DirsAppDirsAdapter {
    base_override: Option<PathBuf>,
}

impl DirsAppDirsAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `base` instead of the platform data-local dir. Tests and portable
    /// installs point this at a scratch directory.
    pub fn with_base_dir(base: impl Into<PathBuf>) -> Self {
        Self {
            base_override: Some(base.into()),
        }
    }

    fn base_dir(&self) -> Option<PathBuf> {
        self.base_override.clone().or_else(dirs::data_local_dir)
    }
}

impl AppDirsPort for DirsAppDirsAdapter {
    fn get_app_dirs(&self) -> Result<AppDirs, AppDirsError> {
        let base = self.base_dir().ok_or(AppDirsError::DataLocalDirUnavailable)?;
        let profile = std::env::var(PROFILE_ENV).ok();

        Ok(AppDirs {
            app_data_root: base.join(app_dir_name(profile.as_deref())),
        })
    }
}
