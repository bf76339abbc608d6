//! User actions: one accessor round-trip and exactly one notice each.
//!
//! SYSTEM CONTEXT
//! ==============
//! [`Inspector`] is the explicitly owned session object hosts hold on to. It
//! never keeps a snapshot itself: every action that touches the page returns a
//! fresh [`StorageView`] from a full re-read and the host swaps it into its
//! [`Cache`]. Concurrent actions are not coordinated; whichever outcome the
//! host applies last wins.
//!
//! ERROR HANDLING
//! ==============
//! Errors stop at the action boundary and become the action's notice. An
//! access failure additionally turns the returned view into
//! [`StorageView::Inaccessible`] so "no data" and "cannot read data" stay
//! distinguishable. Nothing is retried.

#[cfg(test)]
#[path = "actions_test.rs"]
mod actions_test;

use serde_json::{Map, Value};

use crate::accessor::{self, Clipboard, StorageAccessor, WriteReport};
use crate::cache::{Cache, StorageView};
use crate::consts::{
    MSG_COPIED, MSG_COPY_FAILED, MSG_DELETED, MSG_EMPTY_IMPORT, MSG_IMPORTED, MSG_IMPORT_FAILED,
    MSG_INACCESSIBLE, MSG_INVALID_IMPORT, MSG_NOTHING_TO_COPY, MSG_NOT_OBJECT, MSG_REFRESHED,
    MSG_SAVED,
};
use crate::edit::EditSession;
use crate::error::StorageError;
use crate::notice::Notice;

/// Result of one action.
#[derive(Clone, Debug, PartialEq)]
pub struct Outcome {
    pub notice: Notice,
    /// Replacement for the cached view, when the action re-read the page or
    /// learned that it cannot be read.
    pub view: Option<StorageView>,
    /// Whether the action fully succeeded; hosts close the dialog, switch tabs
    /// or clear inputs only then.
    pub succeeded: bool,
}

impl Outcome {
    fn failed(err: &StorageError) -> Self {
        Self {
            notice: Notice::from(err),
            view: err
                .is_access()
                .then(|| StorageView::Inaccessible(err.to_string())),
            succeeded: false,
        }
    }
}

/// Parse bulk-import text into the entries to write.
///
/// # Errors
///
/// - [`StorageError::Validation`] for blank input or JSON that is not an
///   object (arrays, numbers, `null`, ...).
/// - [`StorageError::Parse`] for malformed JSON.
pub fn parse_import(text: &str) -> Result<Map<String, Value>, StorageError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(StorageError::validation(MSG_EMPTY_IMPORT));
    }
    match serde_json::from_str::<Value>(trimmed) {
        Ok(Value::Object(entries)) => Ok(entries),
        Ok(_) => Err(StorageError::validation(MSG_NOT_OBJECT)),
        Err(_) => Err(StorageError::parse(MSG_INVALID_IMPORT)),
    }
}

/// Put the cached snapshot's pretty JSON on the clipboard.
pub async fn copy_snapshot<C>(cache: &Cache, clipboard: &C) -> Notice
where
    C: Clipboard + ?Sized,
{
    let Some(payload) = cache.copy_payload() else {
        return Notice::error(MSG_NOTHING_TO_COPY);
    };
    match clipboard.write_text(&payload).await {
        Ok(()) => Notice::success(MSG_COPIED),
        Err(err) => {
            log::warn!("clipboard write failed: {err}");
            Notice::error(MSG_COPY_FAILED)
        }
    }
}

/// Action controller over one accessor.
#[derive(Clone, Copy, Debug, Default)]
pub struct Inspector<A> {
    accessor: A,
}

impl<A: StorageAccessor> Inspector<A> {
    pub fn new(accessor: A) -> Self {
        Self { accessor }
    }

    pub fn accessor(&self) -> &A {
        &self.accessor
    }

    /// Read the page. Used for the initial load and after every mutation.
    pub async fn load(&self) -> StorageView {
        match accessor::read_all(&self.accessor).await {
            Ok(snapshot) => StorageView::ready(snapshot),
            Err(err) => {
                log::warn!("storage read failed: {err}");
                StorageView::Inaccessible(err.to_string())
            }
        }
    }

    /// Manual refresh.
    pub async fn refresh(&self) -> Outcome {
        let view = self.load().await;
        let (notice, succeeded) = if view.is_inaccessible() {
            (Notice::error(MSG_INACCESSIBLE), false)
        } else {
            (Notice::success(MSG_REFRESHED), true)
        };
        Outcome {
            notice,
            view: Some(view),
            succeeded,
        }
    }

    /// Bulk import of a JSON object, optionally replacing every existing key.
    ///
    /// Rejected input never reaches the accessor.
    pub async fn import(&self, text: &str, clear_first: bool) -> Outcome {
        let entries = match parse_import(text) {
            Ok(entries) => entries,
            Err(err) => return Outcome::failed(&err),
        };
        log::debug!("importing {} entries (clear_first={clear_first})", entries.len());
        match accessor::write_many(&self.accessor, &entries, clear_first).await {
            Ok(report) => self.after_write(&report, Notice::success(MSG_IMPORTED)).await,
            Err(err) => {
                log::warn!("import failed: {err}");
                let mut outcome = Outcome::failed(&err);
                outcome.notice = Notice::error(MSG_IMPORT_FAILED);
                outcome
            }
        }
    }

    /// Save the open dialog's entry.
    ///
    /// On failure the dialog stays open (`succeeded == false`).
    pub async fn save(&self, session: &EditSession) -> Outcome {
        let pending = match session.prepare_save() {
            Ok(pending) => pending,
            Err(err) => return Outcome::failed(&err),
        };
        let mut entries = Map::new();
        entries.insert(pending.key.clone(), Value::String(pending.encoded));
        match accessor::write_many(&self.accessor, &entries, false).await {
            Ok(report) => self.after_write(&report, Notice::success(MSG_SAVED)).await,
            Err(err) => Outcome::failed(&err),
        }
    }

    /// Delete the entry open in the dialog. The host has already asked the
    /// user for confirmation.
    pub async fn delete(&self, session: &EditSession) -> Outcome {
        let key = match session.delete_target() {
            Ok(key) => key,
            Err(err) => return Outcome::failed(&err),
        };
        if let Err(err) = accessor::delete_one(&self.accessor, key).await {
            return Outcome::failed(&err);
        }
        log::debug!("deleted {key}");
        Outcome {
            notice: Notice::success(MSG_DELETED),
            view: Some(self.load().await),
            succeeded: true,
        }
    }

    async fn after_write(&self, report: &WriteReport, success: Notice) -> Outcome {
        let view = Some(self.load().await);
        if report.is_complete() {
            return Outcome {
                notice: success,
                view,
                succeeded: true,
            };
        }
        Outcome {
            notice: Notice::error(format!(
                "{} of {} keys not written: {}",
                report.failed.len(),
                report.failed.len() + report.written.len(),
                report.failed_keys()
            )),
            view,
            succeeded: false,
        }
    }
}
