pub mod fs;
pub mod github;
pub mod preferences;
pub mod viewport;

pub use fs::app_dirs::DirsAppDirsAdapter;
pub use github::GitHubRepositorySource;
pub use preferences::FilePreferenceStore;
pub use viewport::{ElementBox, LayoutViewport};
