//! Storage Module
//!
//! In-memory record store with two indexes over the same items.
//!
//! ## Responsibilities
//! - Own every stored item exactly once (the id index)
//! - Keep a description-ordered index of id handles for listing
//! - Reject duplicate ids before touching either index
//! - Keep the two indexes in step on add and remove
//!
//! ## Layout
//! ```text
//! ┌──────────────────────────────┐      ┌──────────────────────────┐
//! │ id index (HashMap)           │      │ description index        │
//! │   "A1" → StoredItem{Box,..}  │◄─────┤ (BTreeMap, sorted)       │
//! │   "C1" → StoredItem{Tool,..} │◄─────┤   "Box"  → {"A1"}        │
//! └──────────────────────────────┘      │   "Tool" → {"C1"}        │
//!                                       └──────────────────────────┘
//! ```
//! The description index holds ids only, so a record is never duplicated.

mod item;
mod index;
mod manager;
mod shared;

pub use item::StoredItem;
pub use index::DescriptionIndex;
pub use manager::StorageManager;
pub use shared::SharedStorageManager;
