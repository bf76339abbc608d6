//! Shared constants for the inspector crate.

// ── Notices ─────────────────────────────────────────────────────

/// How long a notice stays visible before it dismisses itself.
pub const NOTICE_DURATION_MS: u32 = 2_500;

pub const MSG_COPIED: &str = "✓ Copied to clipboard!";
pub const MSG_NOTHING_TO_COPY: &str = "No data to copy";
pub const MSG_COPY_FAILED: &str = "Failed to copy";
pub const MSG_REFRESHED: &str = "✓ Refreshed!";
pub const MSG_INACCESSIBLE: &str = "Cannot access storage on this page";
pub const MSG_IMPORTED: &str = "✓ Storage updated!";
pub const MSG_IMPORT_FAILED: &str = "Failed to update storage";
pub const MSG_SAVED: &str = "✓ Saved!";
pub const MSG_DELETED: &str = "✓ Deleted!";

// ── Validation ──────────────────────────────────────────────────

pub const MSG_EMPTY_IMPORT: &str = "Please enter JSON data";
pub const MSG_INVALID_IMPORT: &str = "Invalid JSON format";
pub const MSG_NOT_OBJECT: &str = "JSON must be an object";
pub const MSG_KEY_REQUIRED: &str = "Key is required";
pub const MSG_INVALID_JSON: &str = "Invalid JSON";
pub const MSG_NOT_EDITING: &str = "No entry is open for editing";
pub const MSG_DELETE_IN_ADD: &str = "Only existing entries can be deleted";

// ── Size units ──────────────────────────────────────────────────

/// Bytes per kibibyte.
pub const KIB: usize = 1024;

/// Bytes per mebibyte.
pub const MIB: usize = 1024 * 1024;

// ── Counters ────────────────────────────────────────────────────

/// Counter text shown when the page cannot be read.
pub const COUNTER_PLACEHOLDER: &str = "-";
