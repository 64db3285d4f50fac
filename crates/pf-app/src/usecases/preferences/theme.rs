use std::sync::Arc;

use anyhow::Result;
use pf_core::ports::PreferenceStorePort;
use pf_core::preference::{Theme, DARK_MODE_DEFAULT, DARK_MODE_KEY};
use tracing::{info_span, Instrument};

use super::persisted_toggle::PersistedToggle;

/// Colour scheme preference, persisted as the `dark-mode` toggle.
pub struct ThemePreference {
    dark_mode: PersistedToggle,
}

impl ThemePreference {
    pub fn new(store: Arc<dyn PreferenceStorePort>) -> Self {
        Self {
            dark_mode: PersistedToggle::new(store, DARK_MODE_KEY, DARK_MODE_DEFAULT),
        }
    }

    pub async fn current(&self) -> Result<Theme> {
        let span = info_span!("usecase.theme_preference.current");
        async { Ok(Theme::from_dark_mode(self.dark_mode.load().await?)) }
            .instrument(span)
            .await
    }

    pub async fn toggle(&self) -> Result<Theme> {
        let span = info_span!("usecase.theme_preference.toggle");
        async { Ok(Theme::from_dark_mode(self.dark_mode.toggle().await?)) }
            .instrument(span)
            .await
    }

    pub async fn set(&self, theme: Theme) -> Result<()> {
        let span = info_span!("usecase.theme_preference.set", theme = %theme);
        async {
            if self.dark_mode.load().await? == theme.is_dark() {
                return Ok(());
            }
            self.dark_mode.set(theme.is_dark()).await
        }
        .instrument(span)
        .await
    }
}
