//! Transient notice element.

use leptos::prelude::*;

use crate::state::toast::ToastState;

/// Toast showing the latest notice until it is dismissed.
#[component]
pub fn Toast() -> impl IntoView {
    let toast = expect_context::<RwSignal<ToastState>>();

    view! {
        <div id="toast" class=move || toast.with(ToastState::css_class) role="status">
            {move || toast.with(ToastState::message)}
        </div>
    }
}
