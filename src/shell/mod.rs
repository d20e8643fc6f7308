//! Shell Module
//!
//! Numbered text menu that drives a `StorageManager`.
//!
//! ## Menu
//! ```text
//! 1. Add Item                  → prompts: ID, description, location
//! 2. Find Item by ID           → prompt: ID
//! 3. Remove Item               → prompt: ID
//! 4. List Items by Description
//! 5. Exit Program
//! ```
//!
//! ## Flow
//! line → `MenuChoice` → `Request` → `Reply::execute` → `Reply::render`
//!
//! Record errors print as `Error: ...` on the error writer and the menu
//! comes back. End of input ends the session like Exit does.

mod command;
mod reply;
mod session;

pub use command::{MenuChoice, Request};
pub use reply::Reply;
pub use session::{Session, SessionSummary};
