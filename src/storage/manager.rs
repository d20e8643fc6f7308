//! Storage Manager
//!
//! Owns the stored items and keeps both indexes consistent.
//!
//! ## Responsibilities
//! - Reject duplicate ids before any index is touched
//! - Exact lookup and removal by id
//! - Listing in description order
//! - Never unfile another item's description entry on removal

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::config::{Config, DescriptionPolicy};
use crate::error::{Result, StorageError};

use super::{DescriptionIndex, StoredItem};

/// Record store with an id index and a description index
///
/// ## Ownership:
/// - `by_id`: the only owner of each `StoredItem`
/// - `by_description`: ids only, resolved through `by_id` when listing
///
/// Mutations take `&mut self`. Hosts that share a manager across threads
/// wrap it in [`SharedStorageManager`](super::SharedStorageManager).
#[derive(Debug, Clone, Default)]
pub struct StorageManager {
    /// Primary store: id → item
    by_id: HashMap<String, StoredItem>,

    /// Secondary store: description → id handles, sorted by description
    by_description: DescriptionIndex,
}

impl StorageManager {
    /// Create an empty manager with the default (`Overwrite`) policy
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty manager using the index settings from `config`
    pub fn with_config(config: &Config) -> Self {
        Self {
            by_id: HashMap::with_capacity(config.initial_capacity),
            by_description: DescriptionIndex::new(config.description_policy),
        }
    }

    /// Add an item to both indexes
    ///
    /// Fails with `DuplicateItem` if the id is already stored; neither
    /// index is modified in that case.
    pub fn add_item(&mut self, item: StoredItem) -> Result<()> {
        match self.by_id.entry(item.id().to_string()) {
            Entry::Occupied(existing) => {
                tracing::warn!(id = %existing.key(), "Rejected duplicate item");
                Err(StorageError::DuplicateItem(existing.key().clone()))
            }
            Entry::Vacant(slot) => {
                if let Some(displaced) = self.by_description.insert(item.description(), item.id()) {
                    tracing::debug!(
                        description = %item.description(),
                        displaced = %displaced,
                        "Description entry overwritten"
                    );
                }

                tracing::debug!(
                    id = %item.id(),
                    description = %item.description(),
                    "Item added"
                );
                slot.insert(item);
                Ok(())
            }
        }
    }

    /// Look up an item by id
    pub fn find_by_id(&self, id: &str) -> Result<&StoredItem> {
        self.by_id.get(id).ok_or_else(|| {
            tracing::debug!(id = %id, "Item not found");
            StorageError::ItemNotFound(id.to_string())
        })
    }

    /// Remove an item by id, returning it
    ///
    /// The description entry is dropped only if it still points at this
    /// item. A later item that overwrote it keeps its entry.
    pub fn remove_item(&mut self, id: &str) -> Result<StoredItem> {
        let Some(item) = self.by_id.remove(id) else {
            tracing::debug!(id = %id, "Item not found");
            return Err(StorageError::ItemNotFound(id.to_string()));
        };

        let unlisted = self.by_description.remove(item.description(), item.id());

        tracing::debug!(
            id = %item.id(),
            description = %item.description(),
            unlisted,
            "Item removed"
        );
        Ok(item)
    }

    /// Iterate (description, location) pairs in ascending description order
    ///
    /// Lazy and read-only; call again for a fresh pass.
    pub fn list_items_by_description(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.items_by_description()
            .map(|item| (item.description(), item.location()))
    }

    /// Iterate listed items in ascending description order
    pub fn items_by_description(&self) -> impl Iterator<Item = &StoredItem> + '_ {
        self.by_description
            .iter()
            .filter_map(move |(_, id)| self.by_id.get(id))
    }

    /// Check whether an item with this id is stored
    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    /// Number of stored items
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    // =========================================================================
    // Accessors (for testing and debugging)
    // =========================================================================

    /// Number of items reachable from the description listing
    ///
    /// Smaller than `len()` when `Overwrite` has displaced entries.
    pub fn listed_len(&self) -> usize {
        self.by_description.len()
    }

    /// Get the description index policy
    pub fn policy(&self) -> DescriptionPolicy {
        self.by_description.policy()
    }
}
