//! In-memory store implementing [`StorageAccessor`].
//!
//! Behaves like a page's `localStorage`: ordered keys, string values, updates
//! in place. Clones share the same store, so a test or the CLI can keep a
//! handle and inspect what the inspector wrote. It can also pretend to be an
//! unscriptable page or refuse chosen keys the way a full quota would.

#[cfg(test)]
#[path = "memory_test.rs"]
mod memory_test;

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use async_trait::async_trait;

use crate::accessor::{KeyFailure, PageId, RawEntry, StorageAccessor};
use crate::error::StorageError;

#[derive(Debug, Default)]
struct MemoryState {
    entries: Vec<RawEntry>,
    inaccessible: Option<String>,
    refused: HashSet<String>,
    write_calls: usize,
    page_lookups: usize,
}

impl MemoryState {
    fn check_access(&self) -> Result<(), StorageError> {
        match &self.inaccessible {
            Some(reason) => Err(StorageError::access(reason.clone())),
            None => Ok(()),
        }
    }

    fn set(&mut self, key: &str, value: &str) {
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some(entry) => entry.1 = value.to_owned(),
            None => self.entries.push((key.to_owned(), value.to_owned())),
        }
    }
}

/// Shared, single-threaded in-memory key/value store.
#[derive(Clone, Debug)]
pub struct MemoryAccessor {
    page: PageId,
    state: Rc<RefCell<MemoryState>>,
}

impl MemoryAccessor {
    pub fn new(page: impl Into<String>) -> Self {
        Self {
            page: PageId::new(page),
            state: Rc::default(),
        }
    }

    /// A store pre-filled with raw `(key, stored string)` pairs.
    pub fn with_entries<I, K, V>(page: impl Into<String>, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let accessor = Self::new(page);
        {
            let mut state = accessor.state.borrow_mut();
            for (key, value) in entries {
                let (key, value): (String, String) = (key.into(), value.into());
                state.set(&key, &value);
            }
        }
        accessor
    }

    /// Make every call fail as an unscriptable page would (`Some(reason)`),
    /// or restore access (`None`).
    pub fn set_inaccessible(&self, reason: Option<&str>) {
        self.state.borrow_mut().inaccessible = reason.map(str::to_owned);
    }

    /// Refuse future writes of `key`.
    pub fn refuse_key(&self, key: &str) {
        self.state.borrow_mut().refused.insert(key.to_owned());
    }

    /// Current raw contents, in store order.
    #[must_use]
    pub fn entries(&self) -> Vec<RawEntry> {
        self.state.borrow().entries.clone()
    }

    /// Raw stored string for `key`.
    #[must_use]
    pub fn raw(&self, key: &str) -> Option<String> {
        self.state
            .borrow()
            .entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
    }

    /// Number of bulk writes that reached the store.
    #[must_use]
    pub fn write_calls(&self) -> usize {
        self.state.borrow().write_calls
    }

    /// Number of times the target page was resolved.
    #[must_use]
    pub fn page_lookups(&self) -> usize {
        self.state.borrow().page_lookups
    }
}

#[async_trait(?Send)]
impl StorageAccessor for MemoryAccessor {
    async fn active_page(&self) -> Result<PageId, StorageError> {
        let mut state = self.state.borrow_mut();
        state.page_lookups += 1;
        state.check_access()?;
        Ok(self.page.clone())
    }

    async fn read_raw(&self, _page: &PageId) -> Result<Vec<RawEntry>, StorageError> {
        let state = self.state.borrow();
        state.check_access()?;
        Ok(state.entries.clone())
    }

    async fn write_raw(
        &self,
        _page: &PageId,
        entries: &[RawEntry],
        clear_first: bool,
    ) -> Result<Vec<KeyFailure>, StorageError> {
        let mut state = self.state.borrow_mut();
        state.check_access()?;
        state.write_calls += 1;
        if clear_first {
            state.entries.clear();
        }
        let mut failed = Vec::new();
        for (key, value) in entries {
            if state.refused.contains(key) {
                failed.push(KeyFailure {
                    key: key.clone(),
                    reason: "QuotaExceededError".to_owned(),
                });
                continue;
            }
            state.set(key, value);
        }
        Ok(failed)
    }

    async fn remove(&self, _page: &PageId, key: &str) -> Result<(), StorageError> {
        let mut state = self.state.borrow_mut();
        state.check_access()?;
        state.entries.retain(|(k, _)| k != key);
        Ok(())
    }
}
