//! Import tab: bulk JSON import form.

use leptos::prelude::*;

use crate::state::popup::{PopupState, Tab};
use crate::util::storage_actions::{self, PopupHandles};

/// Import tab panel with the JSON input and clear-first option.
#[component]
pub fn ImportPanel() -> impl IntoView {
    let handles = expect_context::<PopupHandles>();
    let ui = expect_context::<RwSignal<PopupState>>();

    view! {
        <section
            id=Tab::Import.panel_id()
            class=move || ui.with(|state| state.panel_class(Tab::Import))
        >
            <textarea
                id="import-input"
                class="import__input"
                placeholder=r#"{"key": "value", "settings": {"theme": "dark"}}"#
                prop:value=move || ui.with(|state| state.import_text.clone())
                on:input=move |ev| {
                    let text = event_target_value(&ev);
                    ui.update(|state| state.import_text = text);
                }
            ></textarea>
            <label class="import__check">
                <input
                    id="clear-before-import"
                    type="checkbox"
                    prop:checked=move || ui.with(|state| state.clear_before_import)
                    on:change=move |ev| {
                        let checked = event_target_checked(&ev);
                        ui.update(|state| state.clear_before_import = checked);
                    }
                />
                "Clear existing keys first"
            </label>
            <div class="import__actions">
                <button
                    id="clear-input-btn"
                    class="btn"
                    on:click=move |_| ui.update(PopupState::clear_import_input)
                >
                    "Clear input"
                </button>
                <button
                    id="import-btn"
                    class="btn btn--primary"
                    on:click=move |_| storage_actions::import(handles)
                >
                    "Import"
                </button>
            </div>
        </section>
    }
}
