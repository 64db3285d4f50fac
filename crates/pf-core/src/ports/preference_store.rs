use async_trait::async_trait;

use super::errors::PreferenceStoreError;

/// Narrow key-value capability for UI preferences.
///
/// Values are opaque text; callers own the encoding.
#[async_trait]
pub trait PreferenceStorePort: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, PreferenceStoreError>;
    async fn set(&self, key: &str, value: &str) -> Result<(), PreferenceStoreError>;
}
