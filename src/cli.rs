//! Command line surface.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use pf_core::app_dirs::AppDirs;
use pf_core::Theme;
use pf_shell::bootstrap::{resolve_config, wire_dependencies};
use pf_shell::commands::{run_preview, run_projects, run_theme, PreviewLayout, ThemeAction};
use pf_shell::presentation::OutputFormat;
use tracing::debug;

const DEFAULT_VIEWPORT_HEIGHT: f64 = 800.0;

#[derive(Debug, Parser)]
#[command(name = "portfolio", version, about = "Portfolio site projects, reveal preview and theme")]
pub struct Cli {
    /// Config file (defaults to <app data>/config.toml when present)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Load the project list once and render it
    Projects {
        #[arg(long, default_value = "text")]
        format: OutputFormat,
    },

    /// Show or change the persisted colour scheme
    Theme {
        #[command(subcommand)]
        action: ThemeCommand,

        #[arg(long, default_value = "text", global = true)]
        format: OutputFormat,
    },

    /// Lay the project cards out and scroll through offsets, reporting reveals
    Preview {
        #[arg(long, default_value = "text")]
        format: OutputFormat,

        /// Scroll offsets to visit, in order
        #[arg(long = "scroll", value_name = "OFFSET", num_args = 1..)]
        scroll: Vec<f64>,

        #[arg(long, default_value_t = DEFAULT_VIEWPORT_HEIGHT)]
        viewport_height: f64,
    },
}

#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ThemeCommand {
    Show,
    Toggle,
    Set { theme: Theme },
}

impl From<ThemeCommand> for ThemeAction {
    fn from(command: ThemeCommand) -> Self {
        match command {
            ThemeCommand::Show => Self::Show,
            ThemeCommand::Toggle => Self::Toggle,
            ThemeCommand::Set { theme } => Self::Set(theme),
        }
    }
}

/// Run one command against the given app data dirs and return its output.
pub async fn execute(cli: Cli, app_dirs: &AppDirs) -> Result<String> {
    let config = resolve_config(cli.config, app_dirs)?;
    debug!(?config, "Configuration resolved");

    match cli.command {
        Command::Projects { format } => {
            let wiring = wire_dependencies(&config, app_dirs, DEFAULT_VIEWPORT_HEIGHT)?;
            Ok(run_projects(&wiring.deps, format).await)
        }
        Command::Theme { action, format } => {
            let wiring = wire_dependencies(&config, app_dirs, DEFAULT_VIEWPORT_HEIGHT)?;
            run_theme(&wiring.deps, action.into(), format).await
        }
        Command::Preview {
            format,
            scroll,
            viewport_height,
        } => {
            let wiring = wire_dependencies(&config, app_dirs, viewport_height)?;
            let report = run_preview(&wiring, PreviewLayout::default(), &scroll, format).await;
            Ok(report.summary())
        }
    }
}
