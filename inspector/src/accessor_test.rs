use super::*;
use crate::coder::StoredValue;
use crate::memory::MemoryAccessor;
use futures::executor::block_on;
use serde_json::json;

fn object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

// =============================================================
// read_all
// =============================================================

#[test]
fn read_all_decodes_stored_strings() {
    let store = MemoryAccessor::with_entries("tab-1", [("a", "1"), ("b", r#"{"x":2}"#), ("c", "hello")]);
    let snapshot = block_on(read_all(&store)).unwrap();
    assert_eq!(snapshot.len(), 3);
    assert_eq!(snapshot.get("b"), Some(&StoredValue::json(json!({ "x": 2 }))));
    assert_eq!(snapshot.get("c"), Some(&StoredValue::raw("hello")));
}

#[test]
fn read_all_fails_on_unscriptable_page() {
    let store = MemoryAccessor::with_entries("chrome://settings", [("a", "1")]);
    store.set_inaccessible(Some("Cannot access a chrome:// URL"));
    let err = block_on(read_all(&store)).unwrap_err();
    assert!(err.is_access());
}

// =============================================================
// write_many
// =============================================================

#[test]
fn write_many_stores_strings_verbatim_and_json_otherwise() {
    let store = MemoryAccessor::new("tab-1");
    let entries = object(json!({ "s": "plain", "o": { "k": [1] }, "n": 5, "nil": null }));
    let report = block_on(write_many(&store, &entries, false)).unwrap();
    assert!(report.is_complete());
    assert_eq!(store.raw("s").as_deref(), Some("plain"));
    assert_eq!(store.raw("o").as_deref(), Some(r#"{"k":[1]}"#));
    assert_eq!(store.raw("n").as_deref(), Some("5"));
    assert_eq!(store.raw("nil").as_deref(), Some("null"));
}

#[test]
fn write_many_follows_map_order() {
    let store = MemoryAccessor::new("tab-1");
    let entries = object(json!({ "zeta": 1, "alpha": 2, "mid": 3 }));
    let report = block_on(write_many(&store, &entries, false)).unwrap();
    assert_eq!(report.written, ["zeta", "alpha", "mid"]);
    let keys: Vec<String> = store.entries().into_iter().map(|(k, _)| k).collect();
    assert_eq!(keys, ["zeta", "alpha", "mid"]);
}

#[test]
fn write_many_keeps_unrelated_keys_without_clear() {
    let store = MemoryAccessor::with_entries("tab-1", [("keep", "1")]);
    block_on(write_many(&store, &object(json!({ "new": "2" })), false)).unwrap();
    assert_eq!(store.raw("keep").as_deref(), Some("1"));
    assert_eq!(store.raw("new").as_deref(), Some("2"));
}

#[test]
fn write_many_clear_first_drops_existing_keys() {
    let store = MemoryAccessor::with_entries("tab-1", [("old", "1")]);
    block_on(write_many(&store, &object(json!({ "new": "2" })), true)).unwrap();
    assert_eq!(store.raw("old"), None);
    assert_eq!(store.raw("new").as_deref(), Some("2"));
}

#[test]
fn write_many_reports_refused_keys_and_writes_the_rest() {
    let store = MemoryAccessor::new("tab-1");
    store.refuse_key("big");
    let entries = object(json!({ "small": "1", "big": "2", "other": "3" }));
    let report = block_on(write_many(&store, &entries, false)).unwrap();
    assert!(!report.is_complete());
    assert_eq!(report.written, ["small", "other"]);
    assert_eq!(report.failed_keys(), "big");
    assert_eq!(store.raw("big"), None);
}

#[test]
fn write_many_fails_on_unscriptable_page() {
    let store = MemoryAccessor::new("tab-1");
    store.set_inaccessible(Some("blocked"));
    let err = block_on(write_many(&store, &object(json!({ "a": 1 })), false)).unwrap_err();
    assert!(err.is_access());
    assert_eq!(store.write_calls(), 0);
}

// =============================================================
// delete_one
// =============================================================

#[test]
fn delete_one_removes_only_that_key() {
    let store = MemoryAccessor::with_entries("tab-1", [("a", "1"), ("b", "2")]);
    block_on(delete_one(&store, "a")).unwrap();
    assert_eq!(store.entries(), vec![("b".to_owned(), "2".to_owned())]);
}

#[test]
fn delete_one_missing_key_is_ok() {
    let store = MemoryAccessor::with_entries("tab-1", [("a", "1")]);
    assert!(block_on(delete_one(&store, "ghost")).is_ok());
    assert_eq!(store.entries().len(), 1);
}

#[test]
fn page_id_displays_inner_text() {
    let page = PageId::new("42");
    assert_eq!(page.as_str(), "42");
    assert_eq!(page.to_string(), "42");
}

// =============================================================
// page resolution
// =============================================================

#[test]
fn every_operation_resolves_the_page_again() {
    let store = MemoryAccessor::with_entries("tab-1", [("a", "1")]);

    block_on(read_all(&store)).unwrap();
    assert_eq!(store.page_lookups(), 1);
    block_on(read_all(&store)).unwrap();
    assert_eq!(store.page_lookups(), 2);

    block_on(write_many(&store, &object(json!({ "b": 2 })), false)).unwrap();
    assert_eq!(store.page_lookups(), 3);

    block_on(delete_one(&store, "a")).unwrap();
    assert_eq!(store.page_lookups(), 4);
}

#[test]
fn page_that_became_unscriptable_fails_the_next_call() {
    let store = MemoryAccessor::with_entries("tab-1", [("a", "1")]);
    block_on(read_all(&store)).unwrap();

    store.set_inaccessible(Some("tab navigated to chrome://newtab"));
    assert!(block_on(delete_one(&store, "a")).unwrap_err().is_access());
    assert_eq!(store.page_lookups(), 2);
}
