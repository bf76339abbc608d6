//! Single-entry edit session behind the add/edit dialog.
//!
//! STATES
//! ======
//! `Closed` is both the initial and the terminal state. `Open` carries a
//! draft in one of two modes:
//! - `Add`: key editable, JSON toggle off, no delete.
//! - `Edit(key)`: key locked (renaming is delete + add), value pre-filled from
//!   the stored value, JSON toggle mirroring how it decoded, delete allowed.
//!
//! The session never talks to the page itself. It validates and encodes the
//! draft into a [`PendingWrite`]; the action controller performs the write and
//! closes the session once it succeeds.

#[cfg(test)]
#[path = "edit_test.rs"]
mod edit_test;

use serde_json::Value;

use crate::coder::{self, StoredValue};
use crate::consts::{MSG_DELETE_IN_ADD, MSG_INVALID_JSON, MSG_KEY_REQUIRED, MSG_NOT_EDITING};
use crate::error::StorageError;

/// Which kind of entry the dialog is working on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EditMode {
    Add,
    /// Editing an existing key; the key cannot change.
    Edit(String),
}

/// Field contents of an open dialog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditDraft {
    mode: EditMode,
    key: String,
    value: String,
    json: bool,
}

impl EditDraft {
    #[must_use]
    pub fn mode(&self) -> &EditMode {
        &self.mode
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    #[must_use]
    pub fn json(&self) -> bool {
        self.json
    }

    #[must_use]
    pub fn key_locked(&self) -> bool {
        matches!(self.mode, EditMode::Edit(_))
    }

    #[must_use]
    pub fn can_delete(&self) -> bool {
        self.key_locked()
    }

    #[must_use]
    pub fn title(&self) -> &'static str {
        match self.mode {
            EditMode::Add => "Add Item",
            EditMode::Edit(_) => "Edit Item",
        }
    }
}

/// A validated write produced by [`EditSession::prepare_save`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingWrite {
    pub key: String,
    /// Exact string to store.
    pub encoded: String,
}

/// Dialog state machine.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum EditSession {
    #[default]
    Closed,
    Open(EditDraft),
}

impl EditSession {
    #[must_use]
    pub fn open_for_add() -> Self {
        Self::Open(EditDraft {
            mode: EditMode::Add,
            key: String::new(),
            value: String::new(),
            json: false,
        })
    }

    #[must_use]
    pub fn open_for_edit(key: &str, stored: &StoredValue) -> Self {
        Self::Open(EditDraft {
            mode: EditMode::Edit(key.to_owned()),
            key: key.to_owned(),
            value: coder::edit_text(stored),
            json: stored.is_json,
        })
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open(_))
    }

    #[must_use]
    pub fn draft(&self) -> Option<&EditDraft> {
        match self {
            Self::Open(draft) => Some(draft),
            Self::Closed => None,
        }
    }

    /// Update the key field. Ignored while the key is locked.
    pub fn set_key(&mut self, key: &str) {
        if let Self::Open(draft) = self {
            if !draft.key_locked() {
                draft.key = key.to_owned();
            }
        }
    }

    pub fn set_value(&mut self, value: &str) {
        if let Self::Open(draft) = self {
            draft.value = value.to_owned();
        }
    }

    pub fn set_json(&mut self, json: bool) {
        if let Self::Open(draft) = self {
            draft.json = json;
        }
    }

    /// Validate the draft and encode it for storage.
    ///
    /// # Errors
    ///
    /// [`StorageError::Validation`] when no dialog is open, the key is blank,
    /// or the JSON toggle is on and the value text does not parse.
    pub fn prepare_save(&self) -> Result<PendingWrite, StorageError> {
        let Self::Open(draft) = self else {
            return Err(StorageError::validation(MSG_NOT_EDITING));
        };
        if draft.key.trim().is_empty() {
            return Err(StorageError::validation(MSG_KEY_REQUIRED));
        }
        let key = match &draft.mode {
            EditMode::Add => draft.key.trim().to_owned(),
            EditMode::Edit(key) => key.clone(),
        };
        let encoded = if draft.json {
            let value = serde_json::from_str::<Value>(&draft.value)
                .map_err(|_| StorageError::validation(MSG_INVALID_JSON))?;
            coder::encode(&value, true)
        } else {
            draft.value.clone()
        };
        Ok(PendingWrite { key, encoded })
    }

    /// Key to remove when the user asks to delete.
    ///
    /// # Errors
    ///
    /// [`StorageError::Validation`] unless an existing entry is being edited.
    pub fn delete_target(&self) -> Result<&str, StorageError> {
        match self {
            Self::Open(EditDraft {
                mode: EditMode::Edit(key),
                ..
            }) => Ok(key.as_str()),
            Self::Open(_) => Err(StorageError::validation(MSG_DELETE_IN_ADD)),
            Self::Closed => Err(StorageError::validation(MSG_NOT_EDITING)),
        }
    }

    /// Cancel, or finish after a successful save/delete. Unsaved edits are
    /// discarded.
    pub fn close(&mut self) {
        *self = Self::Closed;
    }
}

/// Confirmation text shown before deleting `key`.
#[must_use]
pub fn delete_prompt(key: &str) -> String {
    format!("Delete \"{key}\"?")
}
