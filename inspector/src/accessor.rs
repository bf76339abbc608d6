//! Narrow seam between the inspector and whatever can reach a page's store.
//!
//! SYSTEM CONTEXT
//! ==============
//! Hosts implement [`StorageAccessor`]: the popup drives `chrome.scripting`
//! into the active tab, the CLI edits a JSON file, tests use
//! [`crate::memory::MemoryAccessor`]. Only plain strings cross the seam.
//! Decoding, encoding and ordering live in the functions of this module so
//! every host behaves identically.
//!
//! The target page is resolved again before every operation; nothing caches
//! a page across calls.

#[cfg(test)]
#[path = "accessor_test.rs"]
mod accessor_test;

use std::collections::HashSet;
use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::coder;
use crate::error::StorageError;
use crate::snapshot::Snapshot;

/// A `(key, stored string)` pair as the page's store holds it.
pub type RawEntry = (String, String);

/// Identifier of the page an operation targets.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PageId(String);

impl PageId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A key the store refused during a bulk write.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyFailure {
    pub key: String,
    pub reason: String,
}

/// Per-key result of [`write_many`].
///
/// Bulk writes are best effort: every key is attempted, and the ones the store
/// refused are reported instead of rolling back the rest.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WriteReport {
    pub written: Vec<String>,
    pub failed: Vec<KeyFailure>,
}

impl WriteReport {
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }

    /// Comma-separated failed keys, for notices.
    #[must_use]
    pub fn failed_keys(&self) -> String {
        self.failed
            .iter()
            .map(|failure| failure.key.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Host access to one page's key/value store.
#[async_trait(?Send)]
pub trait StorageAccessor {
    /// Resolve the page to operate on (the active tab, a file path, ...).
    async fn active_page(&self) -> Result<PageId, StorageError>;

    /// Every `(key, stored string)` pair, in store order.
    async fn read_raw(&self, page: &PageId) -> Result<Vec<RawEntry>, StorageError>;

    /// Store each pair in order, optionally clearing the store first. Returns
    /// the keys the store refused.
    async fn write_raw(
        &self,
        page: &PageId,
        entries: &[RawEntry],
        clear_first: bool,
    ) -> Result<Vec<KeyFailure>, StorageError>;

    /// Remove one key. Removing a missing key succeeds.
    async fn remove(&self, page: &PageId, key: &str) -> Result<(), StorageError>;
}

/// Host clipboard used by the copy action.
#[async_trait(?Send)]
pub trait Clipboard {
    async fn write_text(&self, text: &str) -> Result<(), StorageError>;
}

/// Read and decode every entry of the active page.
///
/// # Errors
///
/// [`StorageError::Access`] when the page cannot be scripted.
pub async fn read_all<A>(accessor: &A) -> Result<Snapshot, StorageError>
where
    A: StorageAccessor + ?Sized,
{
    let page = accessor.active_page().await?;
    let raw = accessor.read_raw(&page).await?;
    log::debug!("read {} entries from {page}", raw.len());
    Ok(Snapshot::from_raw(raw))
}

/// Write `entries` to the active page in the map's order.
///
/// String values are stored verbatim, anything else as compact JSON. Unrelated
/// keys are left alone unless `clear_first` is set.
///
/// # Errors
///
/// [`StorageError::Access`] when the page cannot be scripted.
pub async fn write_many<A>(
    accessor: &A,
    entries: &Map<String, Value>,
    clear_first: bool,
) -> Result<WriteReport, StorageError>
where
    A: StorageAccessor + ?Sized,
{
    let page = accessor.active_page().await?;
    let encoded: Vec<RawEntry> = entries
        .iter()
        .map(|(key, value)| (key.clone(), coder::encode_for_store(value)))
        .collect();
    let failed = accessor.write_raw(&page, &encoded, clear_first).await?;
    let refused: HashSet<&str> = failed.iter().map(|f| f.key.as_str()).collect();
    let written = encoded
        .into_iter()
        .map(|(key, _)| key)
        .filter(|key| !refused.contains(key.as_str()))
        .collect();
    if !failed.is_empty() {
        log::warn!("{} of {} keys refused by {page}", failed.len(), entries.len());
    }
    Ok(WriteReport { written, failed })
}

/// Remove `key` from the active page. Missing keys are not an error.
///
/// # Errors
///
/// [`StorageError::Access`] when the page cannot be scripted.
pub async fn delete_one<A>(accessor: &A, key: &str) -> Result<(), StorageError>
where
    A: StorageAccessor + ?Sized,
{
    let page = accessor.active_page().await?;
    accessor.remove(&page, key).await
}
