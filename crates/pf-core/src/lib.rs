//! # pf-core
//!
//! Core domain models and ports for the portfolio site.
//!
//! This crate contains pure domain logic without any infrastructure dependencies:
//! the repository list and its load state machine, per-element reveal state,
//! the persisted theme preference encoding, and the ports that adapters implement.

// Public module exports
pub mod app_dirs;
pub mod config;
pub mod ids;
pub mod ports;
pub mod preference;
pub mod project;
pub mod reveal;

// Re-export commonly used types at the crate root
pub use config::AppConfig;
pub use ids::{ElementId, RepositoryId};
pub use preference::Theme;
pub use project::{
    DisplayList, LoadEvent, LoadState, LoadStateMachine, ProjectLoadError, RepositorySummary,
};
pub use reveal::{IntersectionEntry, RevealState, REVEAL_THRESHOLD};
