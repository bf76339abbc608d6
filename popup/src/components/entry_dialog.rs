//! Modal dialog for adding or editing a single entry.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders the open `EditSession`. Every keystroke goes straight into the
//! session; validation and encoding happen only on Save, inside
//! `Inspector::save`.

use leptos::prelude::*;

use inspector::EditSession;

use crate::util::storage_actions::{self, PopupHandles};

/// Add/edit dialog, shown while an edit session is open.
#[component]
pub fn EntryDialog() -> impl IntoView {
    let handles = expect_context::<PopupHandles>();
    let edit = expect_context::<RwSignal<EditSession>>();

    let title = move || edit.with(|s| s.draft().map_or("", |d| d.title()));
    let key = move || edit.with(|s| s.draft().map(|d| d.key().to_owned()).unwrap_or_default());
    let value =
        move || edit.with(|s| s.draft().map(|d| d.value().to_owned()).unwrap_or_default());
    let json = move || edit.with(|s| s.draft().is_some_and(|d| d.json()));
    let key_locked = move || edit.with(|s| s.draft().is_some_and(|d| d.key_locked()));
    let can_delete = move || edit.with(|s| s.draft().is_some_and(|d| d.can_delete()));

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            storage_actions::cancel(handles);
        }
    };

    view! {
        <Show when=move || edit.with(EditSession::is_open)>
            <div class="dialog-backdrop" on:click=move |_| storage_actions::cancel(handles)>
                <div
                    id="edit-modal"
                    class="dialog dialog--entry"
                    on:click=move |ev| ev.stop_propagation()
                    on:keydown=on_keydown
                >
                    <h2 id="modal-title" class="dialog__title">{title}</h2>
                    <label class="dialog__label">
                        "Key"
                        <input
                            id="edit-key"
                            class="dialog__input"
                            type="text"
                            prop:value=key
                            prop:readOnly=key_locked
                            on:input=move |ev| {
                                let text = event_target_value(&ev);
                                edit.update(|s| s.set_key(&text));
                            }
                        />
                    </label>
                    <label class="dialog__label">
                        "Value"
                        <textarea
                            id="edit-value"
                            class="dialog__textarea"
                            prop:value=value
                            on:input=move |ev| {
                                let text = event_target_value(&ev);
                                edit.update(|s| s.set_value(&text));
                            }
                        ></textarea>
                    </label>
                    <label class="dialog__check">
                        <input
                            id="edit-is-json"
                            type="checkbox"
                            prop:checked=json
                            on:change=move |ev| {
                                let checked = event_target_checked(&ev);
                                edit.update(|s| s.set_json(checked));
                            }
                        />
                        "Value is JSON"
                    </label>
                    <div class="dialog__actions">
                        <Show when=can_delete>
                            <button
                                id="delete-btn"
                                class="btn btn--danger"
                                on:click=move |_| storage_actions::delete(handles)
                            >
                                "Delete"
                            </button>
                        </Show>
                        <button
                            id="cancel-btn"
                            class="btn"
                            on:click=move |_| storage_actions::cancel(handles)
                        >
                            "Cancel"
                        </button>
                        <button
                            id="save-btn"
                            class="btn btn--primary"
                            on:click=move |_| storage_actions::save(handles)
                        >
                            "Save"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
