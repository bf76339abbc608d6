//! View tab: highlighted JSON of the whole snapshot.
//!
//! The markup comes from `inspector::format`, which escapes every string
//! before wrapping tokens in spans, so it is safe to inject as HTML.

use leptos::prelude::*;

use inspector::Cache;

use crate::state::popup::{PopupState, Tab};

/// View tab panel rendering the highlighted snapshot.
#[component]
pub fn JsonView() -> impl IntoView {
    let cache = expect_context::<RwSignal<Cache>>();
    let ui = expect_context::<RwSignal<PopupState>>();

    view! {
        <section
            id=Tab::View.panel_id()
            class=move || ui.with(|state| state.panel_class(Tab::View))
        >
            <pre id="json-output" class="json-output" inner_html=move || cache.with(Cache::markup)></pre>
        </section>
    }
}
