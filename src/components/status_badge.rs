//! Active / inactive pill.

use leptos::prelude::*;

pub fn status_label(active: bool) -> &'static str {
    if active { "Active" } else { "Inactive" }
}

#[component]
pub fn StatusBadge(active: bool) -> impl IntoView {
    view! {
        <span class="status-badge" class:status-badge--active=active class:status-badge--inactive=!active>
            {status_label(active)}
        </span>
    }
}
