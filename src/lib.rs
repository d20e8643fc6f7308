//! # Congo Storage
//!
//! An in-memory inventory tracker with:
//! - Unique-id registration with duplicate rejection
//! - Exact lookup and removal by id
//! - Listing ordered by description
//! - A numbered interactive menu shell
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Interactive Shell                         │
//! │            (menu → Request → Reply → render)                 │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │  add / find / remove / list
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                   StorageManager                             │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌──────────────────┐
//!   │  Id Index   │◄─────────┤ Description Index│
//!   │  (HashMap)  │   ids    │    (BTreeMap)    │
//!   └─────────────┘          └──────────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod storage;
pub mod shell;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{StorageError, Result};
pub use config::{Config, DescriptionPolicy};
pub use storage::{SharedStorageManager, StorageManager, StoredItem};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of Congo Storage
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
