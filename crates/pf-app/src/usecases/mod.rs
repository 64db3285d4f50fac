//! Business logic use cases
//!
//! Page mount
//!         ↓
//! LoadProjectList      → loading / error / list
//! VisibilityAnimator   → per-card reveal flags
//! ThemePreference      → data-theme on the page

pub mod preferences;
pub mod projects;
pub mod reveal;

pub use preferences::{PersistedToggle, ThemePreference};
pub use projects::LoadProjectList;
pub use reveal::{RevealSubscription, VisibilityAnimator};
