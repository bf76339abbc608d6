//! Presentation of snapshots: highlighted JSON, the entry list, and counters.
//!
//! SYSTEM CONTEXT
//! ==============
//! Output here is plain strings and rows. The popup injects the markup as
//! inner HTML and renders rows as list items; the CLI prints them.
//!
//! Highlighting is purely lexical: one regular expression picks out string
//! keys, strings, booleans, `null`, and numbers in the already-escaped JSON
//! text, with no awareness of nesting.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use std::cmp::Ordering;
use std::sync::OnceLock;

use regex::{Captures, Regex};

use crate::cache::StorageView;
use crate::coder::{self, StoredValue};
use crate::consts::{COUNTER_PLACEHOLDER, KIB, MIB};
use crate::snapshot::Snapshot;

const TOKEN_PATTERN: &str = r#""(\\u[a-zA-Z0-9]{4}|\\[^u]|[^\\"])*"(\s*:)?|\b(true|false|null)\b|-?[0-9]+(?:\.[0-9]*)?(?:[eE][+\-]?[0-9]+)?"#;

pub const EMPTY_MARKUP: &str = r#"<div class="empty-state"><div class="empty-icon">📭</div><p>No localStorage data found on this page</p></div>"#;
pub const INACCESSIBLE_MARKUP: &str = r#"<div class="empty-state"><div class="empty-icon">⚠️</div><p>Cannot access localStorage on this page.<br>Try on a regular website.</p></div>"#;
pub const LOADING_MARKUP: &str = r#"<div class="empty-state"><p>Loading…</p></div>"#;

/// One row of the entry list.
#[derive(Clone, Debug, PartialEq)]
pub struct ListRow {
    pub key: String,
    /// Stringified value, for display only.
    pub display: String,
    /// Untouched value, handed to the editor.
    pub stored: StoredValue,
}

/// Item-count and size texts for the stats bar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Counters {
    pub items: String,
    pub size: String,
}

fn token_regex() -> Option<&'static Regex> {
    static TOKEN: OnceLock<Option<Regex>> = OnceLock::new();
    TOKEN
        .get_or_init(|| match Regex::new(TOKEN_PATTERN) {
            Ok(regex) => Some(regex),
            Err(err) => {
                log::error!("json token pattern rejected: {err}");
                None
            }
        })
        .as_ref()
}

/// Escape the characters that would otherwise be read as markup.
#[must_use]
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn token_class(token: &str) -> &'static str {
    if token.starts_with('"') {
        if token.ends_with(':') { "key" } else { "string" }
    } else if token.contains("true") || token.contains("false") {
        "boolean"
    } else if token.contains("null") {
        "null"
    } else {
        "number"
    }
}

/// Wrap each JSON token of `json` in a `<span>` carrying its class.
#[must_use]
pub fn highlight(json: &str) -> String {
    let escaped = escape_html(json);
    let Some(regex) = token_regex() else {
        return escaped;
    };
    regex
        .replace_all(&escaped, |caps: &Captures| {
            let token = &caps[0];
            format!(r#"<span class="{}">{token}</span>"#, token_class(token))
        })
        .into_owned()
}

/// Highlighted, indented JSON for a whole snapshot.
#[must_use]
pub fn render_highlighted(snapshot: &Snapshot) -> String {
    highlight(&snapshot.to_pretty_json())
}

/// Markup for the main view in any state.
///
/// An empty store and an unreachable page get visibly different messages.
#[must_use]
pub fn render_view(view: &StorageView) -> String {
    match view {
        StorageView::Loading => LOADING_MARKUP.to_owned(),
        StorageView::Inaccessible(_) => INACCESSIBLE_MARKUP.to_owned(),
        StorageView::Ready(snapshot) if snapshot.is_empty() => EMPTY_MARKUP.to_owned(),
        StorageView::Ready(snapshot) => render_highlighted(snapshot),
    }
}

/// Locale-style key ordering: case-insensitive first, lowercase before
/// uppercase when the keys differ only in case.
#[must_use]
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    let folded = a.to_lowercase().cmp(&b.to_lowercase());
    if folded != Ordering::Equal {
        return folded;
    }
    for (x, y) in a.chars().zip(b.chars()) {
        if x != y {
            return x.is_uppercase().cmp(&y.is_uppercase()).then(x.cmp(&y));
        }
    }
    a.len().cmp(&b.len())
}

/// Sorted rows whose key contains `filter`, ignoring case.
#[must_use]
pub fn render_list(snapshot: &Snapshot, filter: &str) -> Vec<ListRow> {
    let needle = filter.to_lowercase();
    let mut rows: Vec<ListRow> = snapshot
        .iter()
        .filter(|entry| entry.key.to_lowercase().contains(&needle))
        .map(|entry| ListRow {
            key: entry.key.clone(),
            display: coder::display_text(&entry.stored.value),
            stored: entry.stored.clone(),
        })
        .collect();
    rows.sort_by(|a, b| locale_cmp(&a.key, &b.key));
    rows
}

/// Human-readable size for a byte count.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn format_bytes(bytes: usize) -> String {
    if bytes < KIB {
        format!("{bytes} B")
    } else if bytes < MIB {
        format!("{:.1} KB", bytes as f64 / KIB as f64)
    } else {
        format!("{:.1} MB", bytes as f64 / MIB as f64)
    }
}

/// Size of the snapshot's compact JSON, counted in UTF-8 bytes.
#[must_use]
pub fn format_size(snapshot: &Snapshot) -> String {
    format_bytes(snapshot.to_compact_json().len())
}

/// Stats-bar texts: placeholders unless a snapshot is loaded.
#[must_use]
pub fn counters(view: &StorageView) -> Counters {
    match view {
        StorageView::Ready(snapshot) => Counters {
            items: snapshot.len().to_string(),
            size: format_size(snapshot),
        },
        StorageView::Loading | StorageView::Inaccessible(_) => Counters {
            items: COUNTER_PLACEHOLDER.to_owned(),
            size: COUNTER_PLACEHOLDER.to_owned(),
        },
    }
}
