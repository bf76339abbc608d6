use super::*;
use serde_json::json;

// =============================================================
// Opening
// =============================================================

#[test]
fn session_starts_closed() {
    let session = EditSession::default();
    assert!(!session.is_open());
    assert!(session.draft().is_none());
}

#[test]
fn open_for_add_has_blank_unlocked_fields() {
    let session = EditSession::open_for_add();
    let draft = session.draft().unwrap();
    assert_eq!(draft.mode(), &EditMode::Add);
    assert_eq!(draft.key(), "");
    assert_eq!(draft.value(), "");
    assert!(!draft.json());
    assert!(!draft.key_locked());
    assert!(!draft.can_delete());
    assert_eq!(draft.title(), "Add Item");
}

#[test]
fn open_for_edit_prefills_json_entry() {
    let session = EditSession::open_for_edit("cfg", &StoredValue::json(json!({ "x": 2 })));
    let draft = session.draft().unwrap();
    assert_eq!(draft.mode(), &EditMode::Edit("cfg".to_owned()));
    assert_eq!(draft.key(), "cfg");
    assert_eq!(draft.value(), "{\n  \"x\": 2\n}");
    assert!(draft.json());
    assert!(draft.key_locked());
    assert!(draft.can_delete());
}

#[test]
fn open_for_edit_prefills_raw_entry() {
    let session = EditSession::open_for_edit("name", &StoredValue::raw("hello"));
    let draft = session.draft().unwrap();
    assert_eq!(draft.value(), "hello");
    assert!(!draft.json());
}

// =============================================================
// Field updates
// =============================================================

#[test]
fn locked_key_ignores_edits() {
    let mut session = EditSession::open_for_edit("k", &StoredValue::raw("v"));
    session.set_key("renamed");
    assert_eq!(session.draft().unwrap().key(), "k");
}

#[test]
fn setters_update_open_add_draft() {
    let mut session = EditSession::open_for_add();
    session.set_key("k");
    session.set_value("[1]");
    session.set_json(true);
    let draft = session.draft().unwrap();
    assert_eq!(draft.key(), "k");
    assert_eq!(draft.value(), "[1]");
    assert!(draft.json());
}

#[test]
fn setters_on_closed_session_are_noops() {
    let mut session = EditSession::Closed;
    session.set_key("k");
    session.set_value("v");
    session.set_json(true);
    assert_eq!(session, EditSession::Closed);
}

// =============================================================
// prepare_save
// =============================================================

#[test]
fn save_requires_key() {
    let mut session = EditSession::open_for_add();
    session.set_key("   ");
    session.set_value("v");
    assert_eq!(
        session.prepare_save(),
        Err(StorageError::validation("Key is required"))
    );
}

#[test]
fn save_rejects_invalid_json_when_toggle_on() {
    let mut session = EditSession::open_for_add();
    session.set_key("k");
    session.set_value("{oops");
    session.set_json(true);
    assert_eq!(session.prepare_save(), Err(StorageError::validation("Invalid JSON")));
}

#[test]
fn save_raw_value_verbatim() {
    let mut session = EditSession::open_for_add();
    session.set_key("  k  ");
    session.set_value(" {not json ");
    let pending = session.prepare_save().unwrap();
    assert_eq!(pending.key, "k");
    assert_eq!(pending.encoded, " {not json ");
}

#[test]
fn save_json_value_compacts_text() {
    let mut session = EditSession::open_for_add();
    session.set_key("k");
    session.set_value("{ \"a\" : [1, 2] }");
    session.set_json(true);
    assert_eq!(session.prepare_save().unwrap().encoded, r#"{"a":[1,2]}"#);
}

#[test]
fn unchanged_json_edit_is_idempotent() {
    let original = r#"{"x":2,"list":[true,null,"s"]}"#;
    let stored = coder::decode(original);
    let session = EditSession::open_for_edit("k", &stored);
    let pending = session.prepare_save().unwrap();
    assert_eq!(pending.key, "k");
    assert_eq!(pending.encoded, original);
}

#[test]
fn unchanged_json_string_keeps_its_quotes() {
    let stored = coder::decode(r#""hi""#);
    let session = EditSession::open_for_edit("k", &stored);
    assert_eq!(session.prepare_save().unwrap().encoded, r#""hi""#);
}

#[test]
fn edit_mode_keeps_untrimmed_original_key() {
    let session = EditSession::open_for_edit(" spaced ", &StoredValue::raw("v"));
    assert_eq!(session.prepare_save().unwrap().key, " spaced ");
}

#[test]
fn save_on_closed_session_fails() {
    assert!(EditSession::Closed.prepare_save().is_err());
}

// =============================================================
// delete / close
// =============================================================

#[test]
fn delete_target_only_in_edit_mode() {
    let edit = EditSession::open_for_edit("k", &StoredValue::raw("v"));
    assert_eq!(edit.delete_target(), Ok("k"));

    let add = EditSession::open_for_add();
    assert!(matches!(add.delete_target(), Err(StorageError::Validation(_))));

    assert!(EditSession::Closed.delete_target().is_err());
}

#[test]
fn close_discards_draft() {
    let mut session = EditSession::open_for_add();
    session.set_key("k");
    session.close();
    assert_eq!(session, EditSession::Closed);
}

#[test]
fn delete_prompt_quotes_key() {
    assert_eq!(delete_prompt("theme"), "Delete \"theme\"?");
}
