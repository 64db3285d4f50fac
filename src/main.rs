use anyhow::Context;
use clap::Parser;
use pf_core::ports::AppDirsPort;
use pf_infra::DirsAppDirsAdapter;
use pf_shell::bootstrap::tracing::init_tracing_subscriber;
use portfolio_lib::{execute, Cli};
use tracing::error;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let app_dirs = DirsAppDirsAdapter::new()
        .get_app_dirs()
        .context("resolve app data dir failed")?;

    if let Err(err) = init_tracing_subscriber(Some(app_dirs.logs_dir().as_path())) {
        eprintln!("Failed to initialize tracing: {err}");
    }

    match execute(cli, &app_dirs).await {
        Ok(output) => {
            print!("{output}");
            Ok(())
        }
        Err(err) => {
            error!(error = %format!("{err:#}"), "Command failed");
            Err(err)
        }
    }
}
