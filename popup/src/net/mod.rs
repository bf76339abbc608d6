//! Browser extension plumbing.
//!
//! SYSTEM CONTEXT
//! ==============
//! `chrome` implements the inspector's accessor and clipboard seams on top of
//! `chrome.tabs`, `chrome.scripting` and `navigator.clipboard`.

pub mod chrome;
