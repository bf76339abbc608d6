//! Glue between popup events and the inspector controller.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components call these functions from event handlers. Each one snapshots the
//! signals it needs, runs the matching `Inspector` action on a local task, and
//! applies the resulting `Outcome` back to the signals.
//!
//! DESIGN
//! ======
//! Follow-ups that depend on success (closing the dialog, leaving the Import
//! tab) are applied only when `Outcome::succeeded` is set, so failed actions
//! keep whatever the user typed.

#[cfg(test)]
#[path = "storage_actions_test.rs"]
mod storage_actions_test;

use leptos::prelude::*;

use inspector::actions::copy_snapshot;
use inspector::edit::delete_prompt;
use inspector::{Cache, EditSession, Inspector, Outcome};

use crate::net::chrome::{BrowserClipboard, ChromeAccessor};
use crate::state::popup::PopupState;
use crate::state::toast::ToastState;
use crate::util::toast::notify;

/// Signals and controller shared by every popup action.
#[derive(Clone, Copy)]
pub struct PopupHandles {
    pub cache: RwSignal<Cache>,
    pub ui: RwSignal<PopupState>,
    pub edit: RwSignal<EditSession>,
    pub toast: RwSignal<ToastState>,
    pub inspector: Inspector<ChromeAccessor>,
}

impl PopupHandles {
    pub fn new() -> Self {
        Self {
            cache: RwSignal::new(Cache::default()),
            ui: RwSignal::new(PopupState::default()),
            edit: RwSignal::new(EditSession::default()),
            toast: RwSignal::new(ToastState::default()),
            inspector: Inspector::new(ChromeAccessor),
        }
    }

    /// Provide the handles and each signal on its own.
    pub fn provide(self) {
        provide_context(self.cache);
        provide_context(self.ui);
        provide_context(self.edit);
        provide_context(self.toast);
        provide_context(self);
    }
}

impl Default for PopupHandles {
    fn default() -> Self {
        Self::new()
    }
}

/// Fold an outcome's view into the cache.
pub fn apply_view(cache: &mut Cache, outcome: &Outcome) {
    if let Some(view) = &outcome.view {
        cache.replace(view.clone());
    }
}

/// Edit session for clicking the row `key`, if the key is still cached.
pub fn session_for_row(cache: &Cache, key: &str) -> Option<EditSession> {
    cache
        .entry(key)
        .map(|stored| EditSession::open_for_edit(key, stored))
}

fn spawn(task: impl Future<Output = ()> + 'static) {
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(task);
    #[cfg(not(feature = "csr"))]
    drop(task);
}

fn finish(handles: PopupHandles, outcome: &Outcome) {
    handles.cache.update(|cache| apply_view(cache, outcome));
    notify(handles.toast, outcome.notice.clone());
}

#[cfg(feature = "csr")]
fn confirm(prompt: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(prompt).ok())
        .unwrap_or(false)
}

#[cfg(not(feature = "csr"))]
fn confirm(_prompt: &str) -> bool {
    false
}

/// Initial read when the popup opens. No notice on success or failure; an
/// unreadable page shows up in the view itself.
pub fn load(handles: PopupHandles) {
    spawn(async move {
        let view = handles.inspector.load().await;
        handles.cache.update(|cache| cache.replace(view));
    });
}

pub fn refresh(handles: PopupHandles) {
    spawn(async move {
        let outcome = handles.inspector.refresh().await;
        finish(handles, &outcome);
    });
}

pub fn copy(handles: PopupHandles) {
    let cache = handles.cache.get_untracked();
    spawn(async move {
        let notice = copy_snapshot(&cache, &BrowserClipboard).await;
        notify(handles.toast, notice);
    });
}

pub fn import(handles: PopupHandles) {
    let (text, clear_first) = handles
        .ui
        .with_untracked(|ui| (ui.import_text.clone(), ui.clear_before_import));
    spawn(async move {
        let outcome = handles.inspector.import(&text, clear_first).await;
        finish(handles, &outcome);
        if outcome.succeeded {
            handles.ui.update(PopupState::finish_import);
        }
    });
}

pub fn open_add(handles: PopupHandles) {
    handles.edit.set(EditSession::open_for_add());
}

pub fn open_row(handles: PopupHandles, key: &str) {
    if let Some(session) = handles.cache.with_untracked(|cache| session_for_row(cache, key)) {
        handles.edit.set(session);
    } else {
        log::warn!("row {key} vanished from the cache");
    }
}

pub fn cancel(handles: PopupHandles) {
    handles.edit.update(EditSession::close);
}

pub fn save(handles: PopupHandles) {
    let session = handles.edit.get_untracked();
    spawn(async move {
        let outcome = handles.inspector.save(&session).await;
        finish(handles, &outcome);
        if outcome.succeeded {
            handles.edit.update(EditSession::close);
        }
    });
}

/// Ask for confirmation, then delete the entry open in the dialog.
pub fn delete(handles: PopupHandles) {
    let session = handles.edit.get_untracked();
    let Ok(key) = session.delete_target() else {
        return;
    };
    if !confirm(&delete_prompt(key)) {
        return;
    }
    spawn(async move {
        let outcome = handles.inspector.delete(&session).await;
        finish(handles, &outcome);
        if outcome.succeeded {
            handles.edit.update(EditSession::close);
        }
    });
}
