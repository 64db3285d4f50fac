//! Boolean UI preference backed by the preference store

use std::sync::{Arc, Mutex, PoisonError};

use anyhow::{Context, Result};
use pf_core::ports::PreferenceStorePort;
use pf_core::preference::{decode_bool, encode_bool};
use tracing::{debug, info};

/// A boolean preference persisted as `"true"` / `"false"` under a fixed key.
///
/// ## Behavior
/// - The stored value is read once, on first use; absence yields `initial`
/// - Every `set()` / `toggle()` writes through to the store before the
///   in-memory value changes, so a failed write leaves the value untouched
pub struct PersistedToggle {
    store: Arc<dyn PreferenceStorePort>,
    key: String,
    initial: bool,
    current: Mutex<Option<bool>>,
}

impl PersistedToggle {
    pub fn new(store: Arc<dyn PreferenceStorePort>, key: impl Into<String>, initial: bool) -> Self {
        Self {
            store,
            key: key.into(),
            initial,
            current: Mutex::new(None),
        }
    }

    /// Current value, reading the store on first use.
    pub async fn load(&self) -> Result<bool> {
        if let Some(value) = self.cached() {
            return Ok(value);
        }

        let stored = self
            .store
            .get(&self.key)
            .await
            .with_context(|| format!("read preference failed: {}", self.key))?;
        let value = decode_bool(stored.as_deref(), self.initial);
        debug!(key = %self.key, stored = ?stored, value, "Preference loaded");

        *self.current.lock().unwrap_or_else(PoisonError::into_inner) = Some(value);
        Ok(value)
    }

    pub async fn set(&self, next: bool) -> Result<()> {
        self.store
            .set(&self.key, encode_bool(next))
            .await
            .with_context(|| format!("write preference failed: {}", self.key))?;

        let previous = self
            .current
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .replace(next);
        info!(key = %self.key, ?previous, next, "Preference updated");
        Ok(())
    }

    /// Flip the value and persist it. Returns the new value.
    pub async fn toggle(&self) -> Result<bool> {
        let next = !self.load().await?;
        self.set(next).await?;
        Ok(next)
    }

    fn cached(&self) -> Option<bool> {
        *self.current.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use pf_core::ports::PreferenceStoreError;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct MockStore {
        values: Mutex<HashMap<String, String>>,
        get_count: AtomicUsize,
        fail_writes: bool,
    }

    impl MockStore {
        fn with(key: &str, value: &str) -> Self {
            let store = Self::default();
            store
                .values
                .lock()
                .unwrap()
                .insert(key.to_string(), value.to_string());
            store
        }

        fn stored(&self, key: &str) -> Option<String> {
            self.values.lock().unwrap().get(key).cloned()
        }
    }

    #[async_trait]
    impl PreferenceStorePort for MockStore {
        async fn get(&self, key: &str) -> Result<Option<String>, PreferenceStoreError> {
            self.get_count.fetch_add(1, Ordering::SeqCst);
            Ok(self.stored(key))
        }

        async fn set(&self, key: &str, value: &str) -> Result<(), PreferenceStoreError> {
            if self.fail_writes {
                return Err(PreferenceStoreError::Io(std::io::Error::other("disk full")));
            }
            self.values
                .lock()
                .unwrap()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_absent_value_uses_initial() {
        let store = Arc::new(MockStore::default());
        assert!(PersistedToggle::new(store.clone(), "dark-mode", true).load().await.unwrap());
        assert!(!PersistedToggle::new(store, "dark-mode", false).load().await.unwrap());
    }

    #[tokio::test]
    async fn test_stored_text_wins_over_initial() {
        let store = Arc::new(MockStore::with("dark-mode", "false"));
        let toggle = PersistedToggle::new(store, "dark-mode", true);
        assert!(!toggle.load().await.unwrap());
    }

    #[tokio::test]
    async fn test_reads_store_once() {
        let store = Arc::new(MockStore::with("dark-mode", "true"));
        let toggle = PersistedToggle::new(store.clone(), "dark-mode", false);
        toggle.load().await.unwrap();
        toggle.load().await.unwrap();
        toggle.toggle().await.unwrap();
        assert_eq!(store.get_count.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_toggle_twice_restores_stored_value() {
        let store = Arc::new(MockStore::with("dark-mode", "true"));

        let toggle = PersistedToggle::new(store.clone(), "dark-mode", true);
        assert!(!toggle.toggle().await.unwrap());
        assert_eq!(store.stored("dark-mode").as_deref(), Some("false"));
        // a fresh page load sees the latest write
        let fresh = PersistedToggle::new(store.clone(), "dark-mode", true);
        assert!(!fresh.load().await.unwrap());

        assert!(toggle.toggle().await.unwrap());
        assert_eq!(store.stored("dark-mode").as_deref(), Some("true"));
        let fresh = PersistedToggle::new(store, "dark-mode", true);
        assert!(fresh.load().await.unwrap());
    }

    #[tokio::test]
    async fn test_failed_write_keeps_value() {
        let store = Arc::new(MockStore {
            fail_writes: true,
            ..MockStore::default()
        });
        let toggle = PersistedToggle::new(store, "dark-mode", true);

        let err = toggle.toggle().await.unwrap_err();
        assert!(err.to_string().contains("write preference failed: dark-mode"));
        assert!(toggle.load().await.unwrap());
    }
}
