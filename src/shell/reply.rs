//! Replies
//!
//! Outcome of one request, and how it is written back to the operator.

use std::io::Write;

use crate::error::{Result, StorageError};
use crate::storage::{StorageManager, StoredItem};

use super::Request;

/// Result of executing a request
#[derive(Debug)]
pub enum Reply {
    Added,
    Found(StoredItem),
    Removed(StoredItem),
    /// (description, location) pairs in description order
    Listing(Vec<(String, String)>),
    /// A recoverable record error, reported and then ignored
    Failed(StorageError),
}

impl Reply {
    /// Run a request against the manager
    ///
    /// Record errors become `Reply::Failed`; nothing here is fatal.
    pub fn execute(manager: &mut StorageManager, request: Request) -> Self {
        let outcome = match request {
            Request::Add(item) => manager.add_item(item).map(|()| Reply::Added),
            Request::Find { id } => manager.find_by_id(&id).cloned().map(Reply::Found),
            Request::Remove { id } => manager.remove_item(&id).map(Reply::Removed),
            Request::List => Ok(Reply::Listing(
                manager
                    .list_items_by_description()
                    .map(|(description, location)| {
                        (description.to_string(), location.to_string())
                    })
                    .collect(),
            )),
        };

        outcome.unwrap_or_else(Reply::Failed)
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Reply::Failed(_))
    }

    /// Write the reply: results to `out`, errors to `err`
    pub fn render<W: Write, E: Write>(&self, out: &mut W, err: &mut E) -> Result<()> {
        match self {
            Reply::Added => writeln!(out, "Item added successfully.")?,
            Reply::Found(item) => writeln!(out, "Found: {}", item)?,
            Reply::Removed(_) => writeln!(out, "Item removed successfully.")?,
            Reply::Listing(entries) => {
                writeln!(out, "\nItems in Description Order: ")?;
                for (description, location) in entries {
                    writeln!(out, "- {}: {}", description, location)?;
                }
                writeln!(out)?;
            }
            Reply::Failed(e) => writeln!(err, "Error: {}", e)?,
        }
        Ok(())
    }
}
