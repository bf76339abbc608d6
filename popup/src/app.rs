//! Root component of the popup.
//!
//! SYSTEM CONTEXT
//! ==============
//! Creates the shared signals, provides them through context, and kicks off
//! the initial storage read as soon as the popup mounts.

use leptos::prelude::*;

use crate::components::entry_dialog::EntryDialog;
use crate::components::entry_list::EntryList;
use crate::components::import_panel::ImportPanel;
use crate::components::json_view::JsonView;
use crate::components::stats_bar::StatsBar;
use crate::components::tab_bar::TabBar;
use crate::components::toast::Toast;
use crate::components::toolbar::Toolbar;
use crate::util::storage_actions::{self, PopupHandles};

/// Popup root: provides shared state and lays out every panel.
#[component]
pub fn App() -> impl IntoView {
    let handles = PopupHandles::new();
    handles.provide();
    storage_actions::load(handles);

    view! {
        <main class="popup">
            <Toolbar />
            <StatsBar />
            <TabBar />
            <JsonView />
            <EntryList />
            <ImportPanel />
            <EntryDialog />
            <Toast />
        </main>
    }
}
