//! Project list domain.
//!
//! The portfolio shows a bounded list of repositories fetched once from the
//! source-hosting service for one fixed account.

pub mod display_list;
pub mod error;
pub mod load_state;
pub mod repository;

pub use display_list::{DisplayList, MAX_DISPLAY_ITEMS};
pub use error::ProjectLoadError;
pub use load_state::{LoadEvent, LoadState, LoadStateError, LoadStateMachine};
pub use repository::{RepositorySummary, MAX_TOPIC_LABELS};

/// Account whose repositories make up the project list.
pub const PORTFOLIO_ACCOUNT: &str = "akshatphumbhra";
