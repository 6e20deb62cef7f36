//! Key-value persistence for the drawing history.
//!
//! Backends store the versioned [`PersistedHistory`] record under a
//! string key (normally [`crate::history::STORAGE_KEY`]). Persistence
//! is fire-and-forget relative to the interactive core: a failed save
//! or load never blocks or corrupts the in-memory log.

mod memory;

#[cfg(not(target_arch = "wasm32"))]
mod file;

pub use memory::MemoryStorage;

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStorage;

use crate::history::{HistoryLog, PersistedHistory};
use std::future::Future;
use std::pin::Pin;
use thiserror::Error;

/// Storage errors.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("record not found: {0}")]
    NotFound(String),
    #[error("serialization error: {0}")]
    Serialization(String),
    #[error("IO error: {0}")]
    Io(String),
    #[error("storage error: {0}")]
    Other(String),
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Boxed future for async operations.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Trait for history persistence backends.
pub trait Storage: Send + Sync {
    /// Save a history record under a key.
    fn save(&self, key: &str, record: &PersistedHistory) -> BoxFuture<'_, StorageResult<()>>;

    /// Load the history record stored under a key.
    fn load(&self, key: &str) -> BoxFuture<'_, StorageResult<PersistedHistory>>;

    /// Delete the record under a key.
    fn delete(&self, key: &str) -> BoxFuture<'_, StorageResult<()>>;

    /// Check whether a record exists under a key.
    fn exists(&self, key: &str) -> BoxFuture<'_, StorageResult<bool>>;
}

/// Load the history under `key`, falling back to the default initial
/// state when the record is missing or unreadable. Version mismatches
/// are handled inside [`crate::history::HistoryLog::from_persisted`].
pub async fn load_or_default<S: Storage + ?Sized>(storage: &S, key: &str) -> HistoryLog {
    match storage.load(key).await {
        Ok(record) => HistoryLog::from_persisted(record),
        Err(err) => {
            log::debug!("no usable persisted history under {key:?}: {err}");
            HistoryLog::new()
        }
    }
}
