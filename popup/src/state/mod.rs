//! Popup state modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each state struct is held in an `RwSignal` and provided through Leptos
//! context by `app::App`. Storage data itself lives in `inspector::Cache` and
//! the dialog in `inspector::EditSession`; the modules here only cover what is
//! specific to the popup's chrome.

pub mod popup;
pub mod toast;
