//! Interactive session
//!
//! Drives one operator through the numbered menu until they exit or the
//! input closes.

use std::io::{BufRead, Write};

use crate::config::Config;
use crate::error::Result;
use crate::storage::{StorageManager, StoredItem};

use super::{MenuChoice, Reply, Request};

/// Counters reported when a session ends
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    /// Requests executed against the manager
    pub requests: usize,

    /// Requests that ended in a reported record error
    pub errors: usize,

    /// Menu inputs that were not 1-5
    pub invalid_choices: usize,

    /// True if the operator chose Exit, false if the input ran out
    pub exited: bool,
}

/// Menu loop over a line reader and two writers
///
/// Results and prompts go to `out`; record errors go to `err`.
pub struct Session<'a, R, W, E> {
    manager: &'a mut StorageManager,
    reader: R,
    out: W,
    err: E,
    title: String,
}

impl<'a, R: BufRead, W: Write, E: Write> Session<'a, R, W, E> {
    /// Create a session with the default menu title
    pub fn new(manager: &'a mut StorageManager, reader: R, out: W, err: E) -> Self {
        Self {
            manager,
            reader,
            out,
            err,
            title: Config::default().title,
        }
    }

    /// Set the menu title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Run the menu loop (blocking until Exit or end of input)
    ///
    /// Record errors are reported and the loop continues. Only reader or
    /// writer failures are returned as errors.
    pub fn run(&mut self) -> Result<SessionSummary> {
        tracing::info!(title = %self.title, "Session started");
        let mut summary = SessionSummary::default();

        loop {
            self.print_menu()?;

            let Some(line) = self.read_line()? else {
                tracing::debug!("Input closed at menu");
                break;
            };

            let Some(choice) = MenuChoice::parse(&line) else {
                writeln!(self.out, "Invalid choice.")?;
                summary.invalid_choices += 1;
                continue;
            };

            let request = match choice {
                MenuChoice::Exit => {
                    writeln!(self.out, "Thanks for using the storage management system")?;
                    summary.exited = true;
                    break;
                }
                MenuChoice::List => Request::List,
                MenuChoice::Add => match self.read_item()? {
                    Some(item) => Request::Add(item),
                    None => break,
                },
                MenuChoice::Find => match self.prompt("Enter item ID to find: ")? {
                    Some(id) => Request::Find { id },
                    None => break,
                },
                MenuChoice::Remove => match self.prompt("Enter item ID to remove: ")? {
                    Some(id) => Request::Remove { id },
                    None => break,
                },
            };

            tracing::trace!(?request, "Executing request");
            let reply = Reply::execute(self.manager, request);

            summary.requests += 1;
            if reply.is_failure() {
                summary.errors += 1;
            }
            reply.render(&mut self.out, &mut self.err)?;
        }

        self.out.flush()?;
        self.err.flush()?;

        tracing::info!(
            requests = summary.requests,
            errors = summary.errors,
            exited = summary.exited,
            "Session ended"
        );
        Ok(summary)
    }

    fn print_menu(&mut self) -> Result<()> {
        writeln!(self.out, "\nUser Menu for {}", self.title)?;
        for choice in MenuChoice::ALL {
            writeln!(self.out, "{}. {}", choice.code(), choice.label())?;
        }
        write!(self.out, "\nEnter choice: ")?;
        self.out.flush()?;
        Ok(())
    }

    /// Prompt for the three fields of a new item
    fn read_item(&mut self) -> Result<Option<StoredItem>> {
        let Some(id) = self.prompt("Enter item ID: ")? else {
            return Ok(None);
        };
        let Some(description) = self.prompt("Enter item description: ")? else {
            return Ok(None);
        };
        let Some(location) = self.prompt("Enter item location: ")? else {
            return Ok(None);
        };
        Ok(Some(StoredItem::new(id, description, location)))
    }

    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.out, "{}", text)?;
        self.out.flush()?;

        let line = self.read_line()?;
        if line.is_none() {
            tracing::debug!(prompt = %text.trim_end(), "Input closed at prompt");
        }
        Ok(line)
    }

    /// Read one line without its terminator; `None` at end of input
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }

    /// Consume the session, returning its writers
    pub fn into_writers(self) -> (W, E) {
        (self.out, self.err)
    }
}
