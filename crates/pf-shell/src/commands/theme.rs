use anyhow::Result;
use pf_app::{usecase_factory, AppDeps};
use pf_core::Theme;
use tracing::{info_span, Instrument};

use crate::presentation::{render_theme_toggle, theme_attribute, OutputFormat};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeAction {
    Show,
    Toggle,
    Set(Theme),
}

/// Read or change the persisted theme and render the resulting state.
pub async fn run_theme(deps: &AppDeps, action: ThemeAction, format: OutputFormat) -> Result<String> {
    let span = info_span!("command.theme", action = ?action);
    async {
        let preference = usecase_factory::theme_preference(deps);
        let theme = match action {
            ThemeAction::Show => preference.current().await?,
            ThemeAction::Toggle => preference.toggle().await?,
            ThemeAction::Set(theme) => {
                preference.set(theme).await?;
                theme
            }
        };

        Ok(match format {
            OutputFormat::Text => format!("{theme}\n"),
            OutputFormat::Html => format!(
                "<body {}>\n{}\n</body>\n",
                theme_attribute(theme),
                render_theme_toggle(theme)
            ),
        })
    }
    .instrument(span)
    .await
}
