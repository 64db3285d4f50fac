use pf_app::{usecase_factory, AppDeps};
use tracing::{info, info_span, Instrument};

use crate::presentation::{render_projects, OutputFormat};

/// Load the project list once and render it.
///
/// A failed load is rendered as error text; it is not an error of the command.
pub async fn run_projects(deps: &AppDeps, format: OutputFormat) -> String {
    let span = info_span!("command.projects", format = %format);
    async {
        let loader = usecase_factory::load_project_list(deps);
        let state = loader.execute().await;
        info!(state = state.name(), "Project list settled");
        render_projects(&state, format, |_| false)
    }
    .instrument(span)
    .await
}
