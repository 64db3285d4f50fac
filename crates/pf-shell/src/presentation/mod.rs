//! Rendering of use case state for the host surfaces.

pub mod format;
pub mod projects_view;
pub mod theme;

pub use format::OutputFormat;
pub use projects_view::{card_element_id, render_projects, LOADING_TEXT};
pub use theme::{render_theme_toggle, theme_attribute};
