//! Desktop platform implementations.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, RwLock};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::ports::outbound::{StorageProvider, TimeProvider};

/// Clock backed by std::time.
#[derive(Clone, Default)]
pub struct SystemTimeProvider;

impl TimeProvider for SystemTimeProvider {
    fn now_unix_secs(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0)
    }
}

/// File-based key-value storage.
///
/// Stores all values in one JSON file under the platform config directory
/// (e.g. `~/.config/escapade/player/storage.json` on Linux).
#[derive(Clone)]
pub struct FileStorageProvider {
    storage_path: PathBuf,
    cache: Arc<RwLock<HashMap<String, String>>>,
}

impl Default for FileStorageProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl FileStorageProvider {
    pub fn new() -> Self {
        let storage_path = if let Some(dirs) = directories::ProjectDirs::from("io", "escapade", "player")
        {
            dirs.config_dir().join("storage.json")
        } else {
            PathBuf::from("escapade_storage.json")
        };
        Self::at_path(storage_path)
    }

    /// Storage rooted at an explicit file (used by tests).
    pub fn at_path(storage_path: PathBuf) -> Self {
        let cache = if storage_path.exists() {
            match fs::read_to_string(&storage_path) {
                Ok(data) => match serde_json::from_str::<HashMap<String, String>>(&data) {
                    Ok(map) => map,
                    Err(e) => {
                        tracing::warn!("failed to parse storage file: {e}");
                        HashMap::new()
                    }
                },
                Err(e) => {
                    tracing::warn!("failed to read storage file: {e}");
                    HashMap::new()
                }
            }
        } else {
            HashMap::new()
        };

        tracing::debug!("storage initialized at {storage_path:?}");

        Self {
            storage_path,
            cache: Arc::new(RwLock::new(cache)),
        }
    }

    fn persist(&self) {
        if let Some(parent) = self.storage_path.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                tracing::error!("failed to create storage directory: {e}");
                return;
            }
        }
        let snapshot = match self.cache.read() {
            Ok(cache) => cache.clone(),
            Err(_) => return,
        };
        match serde_json::to_string_pretty(&snapshot) {
            Ok(data) => {
                if let Err(e) = fs::write(&self.storage_path, data) {
                    tracing::error!("failed to write storage file: {e}");
                }
            }
            Err(e) => tracing::error!("failed to serialize storage: {e}"),
        }
    }
}

impl StorageProvider for FileStorageProvider {
    fn save(&self, key: &str, value: &str) {
        if let Ok(mut cache) = self.cache.write() {
            cache.insert(key.to_string(), value.to_string());
        }
        self.persist();
    }

    fn load(&self, key: &str) -> Option<String> {
        self.cache.read().ok()?.get(key).cloned()
    }

    fn remove(&self, key: &str) {
        if let Ok(mut cache) = self.cache.write() {
            cache.remove(key);
        }
        self.persist();
    }
}
