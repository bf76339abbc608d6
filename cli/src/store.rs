//! JSON-file-backed storage accessor for the command line.
//!
//! SYSTEM CONTEXT
//! ==============
//! The file holds one JSON object mapping each key to its raw stored string,
//! the same shape a page's `localStorage` has. It is loaded once into an
//! in-memory store and written back after every successful mutation.
//!
//! ERROR HANDLING
//! ==============
//! Problems opening or parsing the file surface as [`CliError`] before any
//! command runs. Failures writing it back become [`StorageError::Access`],
//! which the inspector turns into an error notice.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use inspector::coder::encode_for_store;
use inspector::{KeyFailure, MemoryAccessor, PageId, RawEntry, StorageAccessor, StorageError};
use serde_json::{Map, Value};

use crate::CliError;

#[derive(Clone, Debug)]
pub struct FileAccessor {
    path: PathBuf,
    memory: MemoryAccessor,
}

impl FileAccessor {
    /// Load `path`. A missing file is an empty store and is created on the
    /// first write.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, CliError> {
        let path = path.into();
        let entries = match fs::read_to_string(&path) {
            Ok(text) => parse_store(&text, &path)?,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                log::debug!("{} does not exist yet, starting empty", path.display());
                Vec::new()
            }
            Err(err) => return Err(CliError::Io(err)),
        };
        let memory = MemoryAccessor::with_entries(path.display().to_string(), entries);
        Ok(Self { path, memory })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> Result<(), StorageError> {
        let object: Map<String, Value> = self
            .memory
            .entries()
            .into_iter()
            .map(|(key, raw)| (key, Value::String(raw)))
            .collect();
        let rendered = serde_json::to_string_pretty(&Value::Object(object))
            .map_err(|err| StorageError::access(err.to_string()))?;
        fs::write(&self.path, rendered + "\n").map_err(|err| {
            StorageError::access(format!("cannot write {}: {err}", self.path.display()))
        })
    }
}

/// Parse the store file. Non-string values are accepted and stored the way
/// an import would store them.
fn parse_store(text: &str, path: &Path) -> Result<Vec<RawEntry>, CliError> {
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }
    match serde_json::from_str::<Value>(text)? {
        Value::Object(map) => Ok(map
            .into_iter()
            .map(|(key, value)| match value {
                Value::String(raw) => (key, raw),
                other => {
                    let raw = encode_for_store(&other);
                    (key, raw)
                }
            })
            .collect()),
        _ => Err(CliError::InvalidStore(path.display().to_string())),
    }
}

#[async_trait(?Send)]
impl StorageAccessor for FileAccessor {
    async fn active_page(&self) -> Result<PageId, StorageError> {
        self.memory.active_page().await
    }

    async fn read_raw(&self, page: &PageId) -> Result<Vec<RawEntry>, StorageError> {
        self.memory.read_raw(page).await
    }

    async fn write_raw(
        &self,
        page: &PageId,
        entries: &[RawEntry],
        clear_first: bool,
    ) -> Result<Vec<KeyFailure>, StorageError> {
        let failures = self.memory.write_raw(page, entries, clear_first).await?;
        self.persist()?;
        Ok(failures)
    }

    async fn remove(&self, page: &PageId, key: &str) -> Result<(), StorageError> {
        self.memory.remove(page, key).await?;
        self.persist()
    }
}
