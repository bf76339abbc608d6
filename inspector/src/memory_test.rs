use super::*;
use futures::executor::block_on;

fn pairs(items: &[(&str, &str)]) -> Vec<RawEntry> {
    items
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect()
}

#[test]
fn clones_share_one_store() {
    let store = MemoryAccessor::new("tab");
    let handle = store.clone();
    let page = block_on(store.active_page()).unwrap();
    block_on(store.write_raw(&page, &pairs(&[("a", "1")]), false)).unwrap();
    assert_eq!(handle.raw("a").as_deref(), Some("1"));
}

#[test]
fn set_updates_in_place() {
    let store = MemoryAccessor::with_entries("tab", [("a", "1"), ("b", "2")]);
    let page = block_on(store.active_page()).unwrap();
    block_on(store.write_raw(&page, &pairs(&[("a", "3")]), false)).unwrap();
    assert_eq!(store.entries(), pairs(&[("a", "3"), ("b", "2")]));
}

#[test]
fn inaccessible_store_rejects_every_call() {
    let store = MemoryAccessor::with_entries("tab", [("a", "1")]);
    store.set_inaccessible(Some("privileged page"));
    assert_eq!(
        block_on(store.active_page()),
        Err(StorageError::access("privileged page"))
    );
    let page = PageId::new("tab");
    assert!(block_on(store.read_raw(&page)).is_err());
    assert!(block_on(store.remove(&page, "a")).is_err());

    store.set_inaccessible(None);
    assert!(block_on(store.read_raw(&page)).is_ok());
}

#[test]
fn write_calls_counts_bulk_writes() {
    let store = MemoryAccessor::new("tab");
    let page = block_on(store.active_page()).unwrap();
    assert_eq!(store.write_calls(), 0);
    block_on(store.write_raw(&page, &[], false)).unwrap();
    block_on(store.write_raw(&page, &pairs(&[("x", "y")]), true)).unwrap();
    assert_eq!(store.write_calls(), 2);
}

#[test]
fn page_lookups_count_even_failed_resolutions() {
    let store = MemoryAccessor::new("tab-1");
    store.set_inaccessible(Some("no access"));
    assert!(block_on(store.active_page()).is_err());
    assert_eq!(store.page_lookups(), 1);
}
