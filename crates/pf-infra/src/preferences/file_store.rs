use async_trait::async_trait;
use pf_core::ports::{PreferenceStoreError, PreferenceStorePort};
use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::Mutex;
use tracing::debug;

type PreferenceMap = BTreeMap<String, String>;

/// Preference store backed by a single JSON object on disk.
///
/// The file holds string keys mapped to string values. A missing file reads
/// as an empty store. Writes replace the whole file through a temp file and
/// a rename, so readers see either the old or the new contents.
pub struct FilePreferenceStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FilePreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_map(&self) -> Result<PreferenceMap, PreferenceStoreError> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(PreferenceMap::new()),
            Err(e) => return Err(e.into()),
        };

        if content.trim().is_empty() {
            return Ok(PreferenceMap::new());
        }

        serde_json::from_str(&content).map_err(|e| {
            PreferenceStoreError::Serialization(format!("{}: {e}", self.path.display()))
        })
    }

    async fn atomic_write(&self, map: &PreferenceMap) -> Result<(), PreferenceStoreError> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).await?;
        }

        let content = serde_json::to_string_pretty(map)
            .map_err(|e| PreferenceStoreError::Serialization(e.to_string()))?;

        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, content).await?;
        fs::rename(&tmp_path, &self.path).await?;
        Ok(())
    }
}

#[async_trait]
impl PreferenceStorePort for FilePreferenceStore {
    async fn get(&self, key: &str) -> Result<Option<String>, PreferenceStoreError> {
        let map = self.read_map().await?;
        Ok(map.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), PreferenceStoreError> {
        // Read-modify-write must not interleave with another writer.
        let _guard = self.write_lock.lock().await;

        let mut map = self.read_map().await?;
        map.insert(key.to_string(), value.to_string());
        self.atomic_write(&map).await?;

        debug!(key, path = %self.path.display(), "Preference written");
        Ok(())
    }
}
