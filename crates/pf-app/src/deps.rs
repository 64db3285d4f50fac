//! # Application Dependencies
//!
//! This module defines the dependency grouping for use case construction.
//!
//! **Note**: This is NOT a Builder pattern. There are no build steps, no
//! default values and no hidden logic; it only groups parameters.

use std::sync::Arc;

use pf_core::ports::{PreferenceStorePort, RepositorySourcePort, VisibilityObserverPort};

/// Application dependency grouping (non-Builder, just parameter grouping)
///
/// All dependencies are required - no defaults, no optional fields.
pub struct AppDeps {
    // Project list source
    pub repository_source: Arc<dyn RepositorySourcePort>,

    // Preference storage
    pub preference_store: Arc<dyn PreferenceStorePort>,

    // Viewport
    pub visibility_observer: Arc<dyn VisibilityObserverPort>,
}
