//! Last-read storage view, shared by every rendering of the popup.
//!
//! DESIGN
//! ======
//! The cache is only ever replaced by the result of a full read. Saves,
//! deletes and imports never patch it locally; they trigger a re-read, so the
//! cache cannot drift from the page's real contents. Filtering consults the
//! cache and never touches the page.

#[cfg(test)]
#[path = "cache_test.rs"]
mod cache_test;

use std::sync::Arc;

use crate::coder::StoredValue;
use crate::format::{self, Counters, ListRow};
use crate::snapshot::Snapshot;

/// What is currently known about the page's store.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum StorageView {
    /// No read has completed yet.
    #[default]
    Loading,
    /// The most recent successful read.
    Ready(Arc<Snapshot>),
    /// The page could not be scripted; carries the reason.
    Inaccessible(String),
}

impl StorageView {
    #[must_use]
    pub fn ready(snapshot: Snapshot) -> Self {
        Self::Ready(Arc::new(snapshot))
    }

    #[must_use]
    pub fn snapshot(&self) -> Option<&Snapshot> {
        match self {
            Self::Ready(snapshot) => Some(snapshot.as_ref()),
            Self::Loading | Self::Inaccessible(_) => None,
        }
    }

    #[must_use]
    pub fn is_inaccessible(&self) -> bool {
        matches!(self, Self::Inaccessible(_))
    }
}

/// Process-local holder of the last storage view.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Cache {
    view: StorageView,
}

impl Cache {
    #[must_use]
    pub fn view(&self) -> &StorageView {
        &self.view
    }

    /// Swap in a newer view. The last response to arrive wins.
    pub fn replace(&mut self, view: StorageView) {
        self.view = view;
    }

    #[must_use]
    pub fn snapshot(&self) -> Option<&Snapshot> {
        self.view.snapshot()
    }

    /// Decoded value of `key` in the cached snapshot.
    #[must_use]
    pub fn entry(&self, key: &str) -> Option<&StoredValue> {
        self.snapshot().and_then(|snapshot| snapshot.get(key))
    }

    /// Filtered, sorted list rows. Empty while nothing is loaded.
    #[must_use]
    pub fn rows(&self, filter: &str) -> Vec<ListRow> {
        self.snapshot()
            .map_or_else(Vec::new, |snapshot| format::render_list(snapshot, filter))
    }

    #[must_use]
    pub fn counters(&self) -> Counters {
        format::counters(&self.view)
    }

    #[must_use]
    pub fn markup(&self) -> String {
        format::render_view(&self.view)
    }

    /// Pretty JSON of the cached snapshot, or `None` when there is nothing
    /// worth copying.
    #[must_use]
    pub fn copy_payload(&self) -> Option<String> {
        self.snapshot()
            .filter(|snapshot| !snapshot.is_empty())
            .map(Snapshot::to_pretty_json)
    }
}
