//! Builds [`AppDeps`] from configuration and the app data dirs.

use std::sync::Arc;

use anyhow::Context;
use pf_app::AppDeps;
use pf_core::app_dirs::AppDirs;
use pf_core::config::AppConfig;
use pf_infra::{FilePreferenceStore, GitHubRepositorySource, LayoutViewport};
use tracing::info;

/// Wired dependencies plus the concrete viewport, which the host drives
/// directly (layout and scrolling) while use cases see only the port.
pub struct Wiring {
    pub deps: AppDeps,
    pub viewport: Arc<LayoutViewport>,
}

pub fn wire_dependencies(
    config: &AppConfig,
    app_dirs: &AppDirs,
    viewport_height: f64,
) -> anyhow::Result<Wiring> {
    let source = GitHubRepositorySource::new(&config.projects)
        .context("create repository source failed")?;

    let preferences_path = config
        .preferences
        .path
        .clone()
        .unwrap_or_else(|| app_dirs.preferences_path());
    info!(
        api_base_url = %config.projects.api_base_url,
        preferences = %preferences_path.display(),
        "Wiring dependencies"
    );

    let viewport = Arc::new(LayoutViewport::new(viewport_height));
    let deps = AppDeps {
        repository_source: Arc::new(source),
        preference_store: Arc::new(FilePreferenceStore::new(preferences_path)),
        visibility_observer: viewport.clone(),
    };

    Ok(Wiring { deps, viewport })
}
