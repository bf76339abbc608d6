//! View / Edit / Import tab switcher.

use leptos::prelude::*;

use crate::state::popup::{PopupState, Tab};

/// Tab buttons switching between View, Edit and Import.
#[component]
pub fn TabBar() -> impl IntoView {
    let ui = expect_context::<RwSignal<PopupState>>();

    view! {
        <nav class="tabs">
            {Tab::ALL
                .into_iter()
                .map(|tab| {
                    view! {
                        <button
                            class=move || ui.with(|state| state.tab_class(tab))
                            data-tab=tab.panel_id()
                            on:click=move |_| ui.update(|state| state.tab = tab)
                        >
                            {tab.label()}
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}
