//! Edit tab: filterable, sorted entry list with an Add button.
//!
//! DESIGN
//! ======
//! Rows come from `Cache::rows`, which already sorts and filters. Clicking a
//! row opens the edit dialog with the cached value; the list never reads the
//! page itself.

use leptos::prelude::*;

use inspector::Cache;

use crate::state::popup::{PopupState, Tab};
use crate::util::storage_actions::{self, PopupHandles};

#[cfg(test)]
#[path = "entry_list_test.rs"]
mod entry_list_test;

/// Longest value preview shown in a row before truncating.
const PREVIEW_CHARS: usize = 80;

/// Shorten a row's display text for the list.
pub fn preview(display: &str) -> String {
    if display.chars().count() <= PREVIEW_CHARS {
        return display.to_owned();
    }
    let mut short: String = display.chars().take(PREVIEW_CHARS).collect();
    short.push('…');
    short
}

/// Edit tab panel with the key filter, Add button and entry rows.
#[component]
pub fn EntryList() -> impl IntoView {
    let handles = expect_context::<PopupHandles>();
    let cache = expect_context::<RwSignal<Cache>>();
    let ui = expect_context::<RwSignal<PopupState>>();

    let rows = move || {
        let filter = ui.with(|state| state.filter.clone());
        cache.with(|cache| cache.rows(&filter))
    };

    view! {
        <section
            id=Tab::Edit.panel_id()
            class=move || ui.with(|state| state.panel_class(Tab::Edit))
        >
            <div class="entry-list__controls">
                <input
                    id="search-input"
                    class="entry-list__filter"
                    type="text"
                    placeholder="Filter keys..."
                    prop:value=move || ui.with(|state| state.filter.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        ui.update(|state| state.filter = value);
                    }
                />
                <button
                    id="add-btn"
                    class="btn btn--primary"
                    on:click=move |_| storage_actions::open_add(handles)
                >
                    "+ Add"
                </button>
            </div>
            <ul id="items-list" class="entry-list">
                {move || {
                    rows()
                        .into_iter()
                        .map(|row| {
                            let key = row.key.clone();
                            view! {
                                <li
                                    class="entry-list__row"
                                    on:click=move |_| storage_actions::open_row(handles, &key)
                                >
                                    <span class="entry-list__key">{row.key}</span>
                                    <span class="entry-list__value">{preview(&row.display)}</span>
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ul>
        </section>
    }
}
