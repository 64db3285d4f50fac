//! Port interfaces for the application layer
//!
//! Ports define the contract between the use cases and infrastructure
//! implementations. Use cases receive them as `Arc<dyn Port>` so each can be
//! swapped for an in-memory or mock implementation in tests.
//!
//! ## Port Placement Guidelines
//!
//! Place a port here when it is implemented by the infrastructure layer and
//! depended upon by a use case. Pure domain helpers belong in their domain module.

pub mod app_dirs;
pub mod errors;
pub mod preference_store;
pub mod repository_source;
pub mod visibility;

pub use app_dirs::AppDirsPort;
pub use errors::{AppDirsError, PreferenceStoreError};
pub use preference_store::PreferenceStorePort;
pub use repository_source::RepositorySourcePort;
pub use visibility::VisibilityObserverPort;
