//! Error types for Congo Storage
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using StorageError
pub type Result<T> = std::result::Result<T, StorageError>;

/// Unified error type for Congo Storage operations
#[derive(Debug, Error)]
pub enum StorageError {
    // -------------------------------------------------------------------------
    // Record Errors
    // -------------------------------------------------------------------------
    /// An item with this id is already stored
    #[error("Item with ID {0} already exists!")]
    DuplicateItem(String),

    /// No item is stored under this id
    #[error("Item with ID {0} not found!")]
    ItemNotFound(String),

    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}
