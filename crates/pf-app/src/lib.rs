//! Portfolio Application Orchestration Layer
//!
//! This crate contains the use cases that drive the portfolio page: the
//! one-shot project list load, reveal-on-scroll, and the persisted theme.

pub mod deps;
pub mod usecase_factory;
pub mod usecases;

pub use deps::AppDeps;
pub use usecases::{
    LoadProjectList, PersistedToggle, RevealSubscription, ThemePreference, VisibilityAnimator,
};
