//! Item count and total size of the cached snapshot.

use leptos::prelude::*;

use inspector::Cache;

/// Item count and storage size of the loaded snapshot.
#[component]
pub fn StatsBar() -> impl IntoView {
    let cache = expect_context::<RwSignal<Cache>>();
    let counters = Memo::new(move |_| cache.with(Cache::counters));

    view! {
        <div class="stats-bar">
            <span class="stats-bar__item">
                "Items: " <strong id="item-count">{move || counters.get().items}</strong>
            </span>
            <span class="stats-bar__item">
                "Size: " <strong id="storage-size">{move || counters.get().size}</strong>
            </span>
        </div>
    }
}
