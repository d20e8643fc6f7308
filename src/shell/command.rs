//! Menu choices and requests
//!
//! Represents what the operator picked and entered.

use crate::storage::StoredItem;

/// Numbered menu entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum MenuChoice {
    Add = 1,
    Find = 2,
    Remove = 3,
    List = 4,
    Exit = 5,
}

impl MenuChoice {
    /// All entries, in menu order
    pub const ALL: [MenuChoice; 5] = [
        MenuChoice::Add,
        MenuChoice::Find,
        MenuChoice::Remove,
        MenuChoice::List,
        MenuChoice::Exit,
    ];

    /// Parse one line of operator input
    ///
    /// Surrounding whitespace is ignored. Anything other than 1-5 is `None`.
    pub fn parse(line: &str) -> Option<Self> {
        line.trim().parse::<u8>().ok().and_then(Self::from_code)
    }

    /// Map a menu number to its choice
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(MenuChoice::Add),
            2 => Some(MenuChoice::Find),
            3 => Some(MenuChoice::Remove),
            4 => Some(MenuChoice::List),
            5 => Some(MenuChoice::Exit),
            _ => None,
        }
    }

    pub fn code(&self) -> u8 {
        *self as u8
    }

    /// Menu line label
    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::Add => "Add Item",
            MenuChoice::Find => "Find Item by ID",
            MenuChoice::Remove => "Remove Item",
            MenuChoice::List => "List Items by Description",
            MenuChoice::Exit => "Exit Program",
        }
    }
}

/// A fully-entered request against the storage manager
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    /// Store a new item
    Add(StoredItem),

    /// Look an item up by id
    Find { id: String },

    /// Remove an item by id
    Remove { id: String },

    /// List items in description order
    List,
}

impl Request {
    /// The menu entry this request came from
    pub fn choice(&self) -> MenuChoice {
        match self {
            Request::Add(_) => MenuChoice::Add,
            Request::Find { .. } => MenuChoice::Find,
            Request::Remove { .. } => MenuChoice::Remove,
            Request::List => MenuChoice::List,
        }
    }
}
