//! In-memory storage implementation.

use super::{BoxFuture, Storage, StorageError, StorageResult};
use crate::history::PersistedHistory;
use std::collections::HashMap;
use std::sync::RwLock;

/// In-memory storage for testing and ephemeral use.
#[derive(Default)]
pub struct MemoryStorage {
    records: RwLock<HashMap<String, PersistedHistory>>,
}

impl MemoryStorage {
    /// Create a new empty memory storage.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn save(&self, key: &str, record: &PersistedHistory) -> BoxFuture<'_, StorageResult<()>> {
        let key = key.to_string();
        let record = record.clone();
        Box::pin(async move {
            let mut records = self
                .records
                .write()
                .map_err(|e| StorageError::Other(format!("history map lock poisoned: {}", e)))?;
            records.insert(key, record);
            Ok(())
        })
    }

    fn load(&self, key: &str) -> BoxFuture<'_, StorageResult<PersistedHistory>> {
        let key = key.to_string();
        Box::pin(async move {
            let records = self
                .records
                .read()
                .map_err(|e| StorageError::Other(format!("history map lock poisoned: {}", e)))?;
            records
                .get(&key)
                .cloned()
                .ok_or(StorageError::NotFound(key))
        })
    }

    fn delete(&self, key: &str) -> BoxFuture<'_, StorageResult<()>> {
        let key = key.to_string();
        Box::pin(async move {
            let mut records = self
                .records
                .write()
                .map_err(|e| StorageError::Other(format!("history map lock poisoned: {}", e)))?;
            records.remove(&key);
            Ok(())
        })
    }

    fn exists(&self, key: &str) -> BoxFuture<'_, StorageResult<bool>> {
        let key = key.to_string();
        Box::pin(async move {
            let records = self
                .records
                .read()
                .map_err(|e| StorageError::Other(format!("history map lock poisoned: {}", e)))?;
            Ok(records.contains_key(&key))
        })
    }
}
