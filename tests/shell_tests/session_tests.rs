//! Shell Session Tests
//!
//! Scripted sessions over in-memory readers and writers.
//!
//! Tests verify:
//! - Menu parsing
//! - Each menu action and its output text
//! - Errors go to the error writer and the loop continues
//! - End of input ends the session cleanly

use std::io::Cursor;

use congo_storage::shell::{MenuChoice, Reply, Request, Session, SessionSummary};
use congo_storage::storage::{StorageManager, StoredItem};
use congo_storage::StorageError;

// =============================================================================
// Helper Functions
// =============================================================================

/// Run a scripted session, returning (summary, stdout, stderr)
fn run_script(manager: &mut StorageManager, script: &str) -> (SessionSummary, String, String) {
    let mut session = Session::new(manager, Cursor::new(script.as_bytes()), Vec::new(), Vec::new());
    let summary = session.run().unwrap();
    let (out, err) = session.into_writers();
    (
        summary,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

// =============================================================================
// MenuChoice Tests
// =============================================================================

#[test]
fn test_menu_choice_parse() {
    assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::Add));
    assert_eq!(MenuChoice::parse(" 2 "), Some(MenuChoice::Find));
    assert_eq!(MenuChoice::parse("3\n"), Some(MenuChoice::Remove));
    assert_eq!(MenuChoice::parse("4"), Some(MenuChoice::List));
    assert_eq!(MenuChoice::parse("5"), Some(MenuChoice::Exit));
}

#[test]
fn test_menu_choice_parse_rejects_other_input() {
    assert_eq!(MenuChoice::parse("0"), None);
    assert_eq!(MenuChoice::parse("6"), None);
    assert_eq!(MenuChoice::parse(""), None);
    assert_eq!(MenuChoice::parse("add"), None);
    assert_eq!(MenuChoice::parse("-1"), None);
    assert_eq!(MenuChoice::parse("1 2"), None);
}

#[test]
fn test_menu_choice_codes_round_trip() {
    for choice in MenuChoice::ALL {
        assert_eq!(MenuChoice::from_code(choice.code()), Some(choice));
    }
}

#[test]
fn test_request_choice() {
    assert_eq!(Request::List.choice(), MenuChoice::List);
    assert_eq!(
        Request::Add(StoredItem::new("A1", "Box", "Shelf1")).choice(),
        MenuChoice::Add
    );
    assert_eq!(Request::Remove { id: "A1".into() }.choice(), MenuChoice::Remove);
}

// =============================================================================
// Reply Tests
// =============================================================================

#[test]
fn test_reply_execute_records_failure() {
    let mut manager = StorageManager::new();

    let reply = Reply::execute(&mut manager, Request::Find { id: "Z9".into() });

    assert!(reply.is_failure());
    assert!(matches!(reply, Reply::Failed(StorageError::ItemNotFound(ref id)) if id == "Z9"));
}

#[test]
fn test_reply_render_listing() {
    let reply = Reply::Listing(vec![
        ("Box".to_string(), "Shelf1".to_string()),
        ("Tool".to_string(), "Bin3".to_string()),
    ]);

    let mut out = Vec::new();
    let mut err = Vec::new();
    reply.render(&mut out, &mut err).unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "\nItems in Description Order: \n- Box: Shelf1\n- Tool: Bin3\n\n"
    );
    assert!(err.is_empty());
}

#[test]
fn test_reply_render_failure_goes_to_err() {
    let reply = Reply::Failed(StorageError::DuplicateItem("B1".into()));

    let mut out = Vec::new();
    let mut err = Vec::new();
    reply.render(&mut out, &mut err).unwrap();

    assert!(out.is_empty());
    assert_eq!(
        String::from_utf8(err).unwrap(),
        "Error: Item with ID B1 already exists!\n"
    );
}

// =============================================================================
// Session Tests
// =============================================================================

#[test]
fn test_session_prints_menu_and_exits() {
    let mut manager = StorageManager::new();

    let (summary, out, err) = run_script(&mut manager, "5\n");

    assert!(summary.exited);
    assert_eq!(summary.requests, 0);
    assert!(out.contains("User Menu for Congo Storage Management\n"));
    assert!(out.contains("1. Add Item\n"));
    assert!(out.contains("2. Find Item by ID\n"));
    assert!(out.contains("3. Remove Item\n"));
    assert!(out.contains("4. List Items by Description\n"));
    assert!(out.contains("5. Exit Program\n"));
    assert!(out.contains("\nEnter choice: "));
    assert!(out.ends_with("Thanks for using the storage management system\n"));
    assert!(err.is_empty());
}

#[test]
fn test_session_custom_title() {
    let mut manager = StorageManager::new();
    let mut session =
        Session::new(&mut manager, Cursor::new("5\n"), Vec::new(), Vec::new()).with_title("Depot");

    session.run().unwrap();
    let (out, _) = session.into_writers();

    assert!(String::from_utf8(out).unwrap().contains("User Menu for Depot\n"));
}

#[test]
fn test_session_add_and_find() {
    let mut manager = StorageManager::new();

    let (summary, out, err) = run_script(&mut manager, "1\nA1\nBox\nShelf1\n2\nA1\n5\n");

    assert_eq!(summary.requests, 2);
    assert_eq!(summary.errors, 0);
    assert!(out.contains("Enter item ID: "));
    assert!(out.contains("Enter item description: "));
    assert!(out.contains("Enter item location: "));
    assert!(out.contains("Item added successfully.\n"));
    assert!(out.contains("Enter item ID to find: "));
    assert!(out.contains("Found: Box at Shelf1\n"));
    assert!(err.is_empty());
    assert_eq!(manager.find_by_id("A1").unwrap().location(), "Shelf1");
}

#[test]
fn test_session_fields_keep_inner_whitespace() {
    let mut manager = StorageManager::new();

    run_script(&mut manager, "1\nA 1\n Big Box \nShelf 1\r\n5\n");

    let found = manager.find_by_id("A 1").unwrap();
    assert_eq!(found.description(), " Big Box ");
    assert_eq!(found.location(), "Shelf 1");
}

#[test]
fn test_session_duplicate_reports_error_and_continues() {
    let mut manager = StorageManager::new();

    let (summary, out, err) =
        run_script(&mut manager, "1\nB1\nCrate\nRoom2\n1\nB1\nCrate\nRoom2\n4\n5\n");

    assert_eq!(summary.requests, 3);
    assert_eq!(summary.errors, 1);
    assert!(summary.exited);
    assert_eq!(err, "Error: Item with ID B1 already exists!\n");
    assert_eq!(out.matches("Item added successfully.").count(), 1);
    assert!(out.contains("- Crate: Room2\n"));
}

#[test]
fn test_session_remove_and_not_found() {
    let mut manager = StorageManager::new();

    let (summary, out, err) =
        run_script(&mut manager, "1\nC1\nTool\nBin3\n3\nC1\n2\nC1\n3\nC1\n5\n");

    assert_eq!(summary.requests, 4);
    assert_eq!(summary.errors, 2);
    assert!(out.contains("Enter item ID to remove: "));
    assert!(out.contains("Item removed successfully.\n"));
    assert_eq!(
        err,
        "Error: Item with ID C1 not found!\nError: Item with ID C1 not found!\n"
    );
    assert!(manager.is_empty());
}

#[test]
fn test_session_list_in_description_order() {
    let mut manager = StorageManager::new();
    manager.add_item(StoredItem::new("1", "Tool", "Bin3")).unwrap();
    manager.add_item(StoredItem::new("2", "Box", "Shelf1")).unwrap();

    let (_, out, _) = run_script(&mut manager, "4\n5\n");

    assert!(out.contains("\nItems in Description Order: \n- Box: Shelf1\n- Tool: Bin3\n\n"));
}

#[test]
fn test_session_invalid_choice() {
    let mut manager = StorageManager::new();

    let (summary, out, err) = run_script(&mut manager, "9\nabc\n\n5\n");

    assert_eq!(summary.invalid_choices, 3);
    assert_eq!(summary.requests, 0);
    assert_eq!(out.matches("Invalid choice.\n").count(), 3);
    assert!(summary.exited);
    assert!(err.is_empty());
}

#[test]
fn test_session_end_of_input_at_menu() {
    let mut manager = StorageManager::new();

    let (summary, out, _) = run_script(&mut manager, "1\nA1\nBox\nShelf1\n");

    assert!(!summary.exited);
    assert_eq!(summary.requests, 1);
    assert!(!out.contains("Thanks for using"));
    assert!(manager.contains("A1"));
}

#[test]
fn test_session_end_of_input_mid_prompt_adds_nothing() {
    let mut manager = StorageManager::new();

    let (summary, _, _) = run_script(&mut manager, "1\nA1\nBox");

    // "Box" without a newline is still a line; location prompt hits EOF
    assert!(!summary.exited);
    assert_eq!(summary.requests, 0);
    assert!(manager.is_empty());
}

#[test]
fn test_session_empty_input() {
    let mut manager = StorageManager::new();

    let (summary, out, err) = run_script(&mut manager, "");

    assert_eq!(summary, SessionSummary::default());
    assert!(out.contains("Enter choice: "));
    assert!(err.is_empty());
}
