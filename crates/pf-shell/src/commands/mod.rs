//! Command entry points. Each returns the text to print; the binary owns stdout.

pub mod preview;
pub mod projects;
pub mod theme;

pub use preview::{run_preview, PreviewLayout, PreviewReport, PreviewStep};
pub use projects::run_projects;
pub use theme::{run_theme, ThemeAction};
