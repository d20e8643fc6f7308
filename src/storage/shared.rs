//! Shared Storage Manager
//!
//! RwLock wrapper for hosts that call in from several threads.

use parking_lot::RwLock;

use crate::config::Config;
use crate::error::Result;

use super::{StorageManager, StoredItem};

/// Thread-safe storage manager
///
/// ## Concurrency:
/// - One RwLock guards both indexes, so each add/remove is atomic to readers
/// - Writes (add/remove): exclusive lock
/// - Reads (find/list/len): shared lock, many concurrent readers
/// - Reads return owned values since nothing may borrow past the guard
#[derive(Debug, Default)]
pub struct SharedStorageManager {
    inner: RwLock<StorageManager>,
}

impl SharedStorageManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: &Config) -> Self {
        Self::from(StorageManager::with_config(config))
    }

    /// Add an item (write lock)
    pub fn add_item(&self, item: StoredItem) -> Result<()> {
        self.inner.write().add_item(item)
    }

    /// Look up an item by id (read lock)
    pub fn find_by_id(&self, id: &str) -> Result<StoredItem> {
        self.inner.read().find_by_id(id).cloned()
    }

    /// Remove an item by id (write lock)
    pub fn remove_item(&self, id: &str) -> Result<StoredItem> {
        self.inner.write().remove_item(id)
    }

    /// Snapshot of (description, location) pairs in description order (read lock)
    pub fn list_items_by_description(&self) -> Vec<(String, String)> {
        self.inner
            .read()
            .list_items_by_description()
            .map(|(description, location)| (description.to_string(), location.to_string()))
            .collect()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.inner.read().contains(id)
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Unwrap into the single-threaded manager
    pub fn into_inner(self) -> StorageManager {
        self.inner.into_inner()
    }
}

impl From<StorageManager> for SharedStorageManager {
    fn from(manager: StorageManager) -> Self {
        Self {
            inner: RwLock::new(manager),
        }
    }
}
