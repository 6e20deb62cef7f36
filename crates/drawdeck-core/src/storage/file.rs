//! File-based storage implementation for native platforms.

use super::{BoxFuture, Storage, StorageError, StorageResult};
use crate::history::PersistedHistory;
use std::fs;
use std::path::PathBuf;

/// File-based storage for native platforms.
///
/// Stores history records as JSON files in a specified directory.
pub struct FileStorage {
    /// Base directory for record storage.
    base_path: PathBuf,
}

impl FileStorage {
    /// Create a new file storage with the given base directory.
    ///
    /// Creates the directory if it doesn't exist.
    pub fn new(base_path: PathBuf) -> StorageResult<Self> {
        if !base_path.exists() {
            fs::create_dir_all(&base_path).map_err(|e| {
                StorageError::Io(format!("cannot create history directory: {}", e))
            })?;
        }
        Ok(Self { base_path })
    }

    /// Create file storage in the default location.
    ///
    /// On Unix: `~/.local/share/drawdeck/history/`
    /// On Windows: `%APPDATA%\drawdeck\history\`
    pub fn default_location() -> StorageResult<Self> {
        let base = dirs::data_local_dir()
            .or_else(dirs::home_dir)
            .ok_or_else(|| StorageError::Io("no data directory available for history storage".to_string()))?;

        let path = base.join("drawdeck").join("history");
        Self::new(path)
    }

    /// Get the file path for a storage key.
    ///
    /// Bytes outside `[A-Za-z0-9_-]` are escaped as `%xx`, and `%`
    /// itself is always escaped, so distinct keys can never collide on
    /// the same file.
    fn record_path(&self, key: &str) -> PathBuf {
        let mut safe_key = String::with_capacity(key.len());
        for byte in key.bytes() {
            match byte {
                b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'-' | b'_' => {
                    safe_key.push(byte as char)
                }
                _ => safe_key.push_str(&format!("%{:02x}", byte)),
            }
        }
        self.base_path.join(format!("{}.json", safe_key))
    }

    /// Get the base path.
    pub fn base_path(&self) -> &PathBuf {
        &self.base_path
    }
}

impl Storage for FileStorage {
    fn save(&self, key: &str, record: &PersistedHistory) -> BoxFuture<'_, StorageResult<()>> {
        let path = self.record_path(key);
        let json = match serde_json::to_string_pretty(record) {
            Ok(j) => j,
            Err(e) => {
                return Box::pin(async move { Err(StorageError::Serialization(e.to_string())) });
            }
        };

        Box::pin(async move {
            fs::write(&path, json)
                .map_err(|e| StorageError::Io(format!("cannot write {}: {}", path.display(), e)))
        })
    }

    fn load(&self, key: &str) -> BoxFuture<'_, StorageResult<PersistedHistory>> {
        let path = self.record_path(key);
        let key_owned = key.to_string();

        Box::pin(async move {
            if !path.exists() {
                return Err(StorageError::NotFound(key_owned));
            }

            let json = fs::read_to_string(&path)
                .map_err(|e| StorageError::Io(format!("cannot read {}: {}", path.display(), e)))?;

            serde_json::from_str(&json).map_err(|e| {
                StorageError::Serialization(format!("invalid history record in {}: {}", path.display(), e))
            })
        })
    }

    fn delete(&self, key: &str) -> BoxFuture<'_, StorageResult<()>> {
        let path = self.record_path(key);

        Box::pin(async move {
            if path.exists() {
                fs::remove_file(&path).map_err(|e| {
                    StorageError::Io(format!("cannot delete {}: {}", path.display(), e))
                })?;
            }
            Ok(())
        })
    }

    fn exists(&self, key: &str) -> BoxFuture<'_, StorageResult<bool>> {
        let path = self.record_path(key);
        Box::pin(async move { Ok(path.exists()) })
    }
}
