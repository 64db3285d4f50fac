pub mod app_config;

pub use app_config::{AppConfig, PreferencesConfig, ProjectsConfig, DEFAULT_API_BASE_URL};
