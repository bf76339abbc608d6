//! Popup header with the Copy and Refresh actions.

use leptos::prelude::*;

use crate::util::storage_actions::{self, PopupHandles};

/// Popup header with the title and the Copy / Refresh buttons.
#[component]
pub fn Toolbar() -> impl IntoView {
    let handles = expect_context::<PopupHandles>();

    view! {
        <header class="toolbar">
            <h1 class="toolbar__title">"LocalStorage Viewer"</h1>
            <div class="toolbar__actions">
                <button
                    id="copy-btn"
                    class="btn"
                    title="Copy JSON to clipboard"
                    on:click=move |_| storage_actions::copy(handles)
                >
                    "Copy"
                </button>
                <button
                    id="refresh-btn"
                    class="btn"
                    title="Reload storage from the page"
                    on:click=move |_| storage_actions::refresh(handles)
                >
                    "Refresh"
                </button>
            </div>
        </header>
    }
}
