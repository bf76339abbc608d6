//! Showing notices with automatic dismissal.

use leptos::prelude::*;

use inspector::Notice;
#[cfg(feature = "csr")]
use inspector::consts::NOTICE_DURATION_MS;

use crate::state::toast::ToastState;

/// Show `notice` and hide it again after the notice duration, unless a newer
/// notice replaced it in the meantime.
pub fn notify(toast: RwSignal<ToastState>, notice: Notice) {
    let mut seq = 0;
    toast.update(|state| seq = state.show(notice));

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(
            NOTICE_DURATION_MS,
        )))
        .await;
        toast.update(|state| state.dismiss(seq));
    });
    #[cfg(not(feature = "csr"))]
    let _ = seq;
}
