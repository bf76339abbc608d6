use super::*;

use inspector::{Notice, Snapshot, StorageView};

fn cache_with(pairs: &[(&str, &str)]) -> Cache {
    let mut cache = Cache::default();
    cache.replace(StorageView::ready(Snapshot::from_raw(
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned())),
    )));
    cache
}

// =============================================================
// apply_view
// =============================================================

#[test]
fn apply_view_replaces_cache_when_outcome_reread() {
    let mut cache = Cache::default();
    let fresh = cache_with(&[("a", "1")]);
    let outcome = Outcome {
        notice: Notice::success("✓ Refreshed!"),
        view: Some(fresh.view().clone()),
        succeeded: true,
    };
    apply_view(&mut cache, &outcome);
    assert_eq!(cache, fresh);
}

#[test]
fn apply_view_keeps_cache_for_rejected_input() {
    let mut cache = cache_with(&[("a", "1")]);
    let before = cache.clone();
    let outcome = Outcome {
        notice: Notice::error("Invalid JSON format"),
        view: None,
        succeeded: false,
    };
    apply_view(&mut cache, &outcome);
    assert_eq!(cache, before);
}

// =============================================================
// session_for_row
// =============================================================

#[test]
fn session_for_row_opens_edit_with_stored_value() {
    let cache = cache_with(&[("user", r#"{"n":1}"#)]);
    let session = session_for_row(&cache, "user").unwrap();
    let draft = session.draft().unwrap();
    assert!(draft.key_locked());
    assert_eq!(draft.key(), "user");
    assert!(draft.json());
}

#[test]
fn session_for_row_unknown_key_is_none() {
    let cache = cache_with(&[("a", "1")]);
    assert!(session_for_row(&cache, "missing").is_none());
    assert!(session_for_row(&Cache::default(), "a").is_none());
}
