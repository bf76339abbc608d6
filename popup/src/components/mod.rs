//! Reusable popup component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the popup chrome and read/write shared state from the
//! Leptos context installed by `app::App`. Anything that talks to the page
//! goes through `util::storage_actions`.

pub mod entry_dialog;
pub mod entry_list;
pub mod import_panel;
pub mod json_view;
pub mod stats_bar;
pub mod tab_bar;
pub mod toast;
pub mod toolbar;
