pub mod persisted_toggle;
pub mod theme;

pub use persisted_toggle::PersistedToggle;
pub use theme::ThemePreference;
