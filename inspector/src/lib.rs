//! # inspector
//!
//! Host-agnostic core of the storage inspector: value coding, snapshots,
//! presentation formatting, the single-entry edit session, the snapshot cache,
//! and the action controller that turns each user action into accessor calls
//! plus one notice.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser popup (`popup`) and the command-line front end (`cli`) both sit
//! on top of this crate. Neither the page's key/value store nor the clipboard
//! is touched directly here; hosts implement [`accessor::StorageAccessor`] and
//! [`accessor::Clipboard`] and everything else is plain data.

pub mod accessor;
pub mod actions;
pub mod cache;
pub mod coder;
pub mod consts;
pub mod edit;
pub mod error;
pub mod format;
pub mod memory;
pub mod notice;
pub mod snapshot;

pub use accessor::{Clipboard, KeyFailure, PageId, RawEntry, StorageAccessor, WriteReport};
pub use actions::{Inspector, Outcome};
pub use cache::{Cache, StorageView};
pub use coder::StoredValue;
pub use edit::{EditDraft, EditMode, EditSession, PendingWrite};
pub use error::StorageError;
pub use memory::MemoryAccessor;
pub use notice::{Notice, NoticeLevel};
pub use snapshot::{Snapshot, SnapshotEntry};
