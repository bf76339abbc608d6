//! Immutable snapshot of a page's key/value store.
//!
//! A snapshot is built fresh from the raw pairs of every read and is never
//! patched afterwards; a newer read replaces it wholesale.

#[cfg(test)]
#[path = "snapshot_test.rs"]
mod snapshot_test;

use std::collections::HashSet;

use serde_json::{Map, Value};

use crate::coder::{self, StoredValue};

/// One key and its decoded value.
#[derive(Clone, Debug, PartialEq)]
pub struct SnapshotEntry {
    pub key: String,
    pub stored: StoredValue,
}

/// All entries of a store, in the order the store enumerated them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Snapshot {
    entries: Vec<SnapshotEntry>,
}

impl Snapshot {
    /// Build a snapshot from raw `(key, stored string)` pairs.
    ///
    /// Keys are unique in a real store; should a host report a key twice, the
    /// first occurrence wins.
    pub fn from_raw<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut seen = HashSet::new();
        let entries = pairs
            .into_iter()
            .filter(|(key, _)| seen.insert(key.clone()))
            .map(|(key, raw)| SnapshotEntry {
                stored: coder::decode(&raw),
                key,
            })
            .collect();
        Self { entries }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SnapshotEntry> {
        self.entries.iter()
    }

    /// Decoded value for `key`, if present.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&StoredValue> {
        self.entries
            .iter()
            .find(|entry| entry.key == key)
            .map(|entry| &entry.stored)
    }

    /// The snapshot as a JSON object of decoded values, in store order.
    #[must_use]
    pub fn to_json_value(&self) -> Value {
        let map: Map<String, Value> = self
            .entries
            .iter()
            .map(|entry| (entry.key.clone(), entry.stored.value.clone()))
            .collect();
        Value::Object(map)
    }

    /// Two-space indented JSON, used for display and the copy payload.
    #[must_use]
    pub fn to_pretty_json(&self) -> String {
        coder::pretty_json(&self.to_json_value())
    }

    /// Compact JSON, the basis for the size counter.
    #[must_use]
    pub fn to_compact_json(&self) -> String {
        coder::compact_json(&self.to_json_value())
    }
}
