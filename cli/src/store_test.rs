use super::*;

use inspector::accessor::{read_all, write_many};
use tokio::runtime::Builder;

fn block_on<F: std::future::Future>(future: F) -> F::Output {
    Builder::new_current_thread()
        .build()
        .expect("runtime")
        .block_on(future)
}

// =============================================================
// open
// =============================================================

#[test]
fn missing_file_is_empty_store() {
    let dir = tempfile::tempdir().unwrap();
    let accessor = FileAccessor::open(dir.path().join("absent.json")).unwrap();
    let snapshot = block_on(read_all(&accessor)).unwrap();
    assert!(snapshot.is_empty());
}

#[test]
fn file_order_and_raw_strings_are_kept() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store.json");
    fs::write(&path, r#"{"theme":"dark","user":"{\"n\":1}","count":"1"}"#).unwrap();

    let accessor = FileAccessor::open(&path).unwrap();
    let snapshot = block_on(read_all(&accessor)).unwrap();
    let keys: Vec<_> = snapshot.iter().map(|e| e.key.as_str()).collect();
    assert_eq!(keys, ["theme", "user", "count"]);
    assert!(snapshot.get("user").unwrap().is_json);
    assert!(!snapshot.get("theme").unwrap().is_json);
}

#[test]
fn non_string_values_are_stored_like_an_import() {
    let entries = parse_store(r#"{"n":5,"o":{"a":true},"s":"x"}"#, Path::new("s.json")).unwrap();
    assert_eq!(
        entries,
        vec![
            ("n".to_owned(), "5".to_owned()),
            ("o".to_owned(), r#"{"a":true}"#.to_owned()),
            ("s".to_owned(), "x".to_owned()),
        ]
    );
}

#[test]
fn non_object_file_is_rejected() {
    let err = parse_store("[1,2]", Path::new("s.json")).unwrap_err();
    assert!(matches!(err, CliError::InvalidStore(_)));
    assert!(matches!(
        parse_store("{oops", Path::new("s.json")).unwrap_err(),
        CliError::InvalidJson(_)
    ));
    assert!(parse_store("  \n", Path::new("s.json")).unwrap().is_empty());
}

// =============================================================
// write-back
// =============================================================

#[test]
fn writes_are_persisted_to_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store.json");
    let accessor = FileAccessor::open(&path).unwrap();

    let mut entries = serde_json::Map::new();
    entries.insert("a".to_owned(), serde_json::json!({"x": 1}));
    entries.insert("b".to_owned(), Value::String("plain".to_owned()));
    let report = block_on(write_many(&accessor, &entries, false)).unwrap();
    assert!(report.is_complete());

    let reopened = FileAccessor::open(&path).unwrap();
    let snapshot = block_on(read_all(&reopened)).unwrap();
    assert_eq!(snapshot.to_compact_json(), r#"{"a":{"x":1},"b":"plain"}"#);
}

#[test]
fn remove_is_persisted_to_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store.json");
    fs::write(&path, r#"{"a":"1","b":"2"}"#).unwrap();
    let accessor = FileAccessor::open(&path).unwrap();

    block_on(inspector::accessor::delete_one(&accessor, "a")).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    let on_disk: Value = serde_json::from_str(&text).unwrap();
    assert_eq!(on_disk, serde_json::json!({"b": "2"}));
}
