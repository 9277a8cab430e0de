//! Page-size picker, range label and prev/next controls for in-memory lists.

use leptos::prelude::*;

use crate::config::PAGE_SIZES;
use crate::state::list::Pagination;

#[component]
pub fn Pager(pagination: RwSignal<Pagination>, #[prop(into)] total: Signal<usize>) -> impl IntoView {
    // Filtering can shrink the list under the current page.
    Effect::new(move || {
        let total = total.get();
        if pagination.with_untracked(|p| p.page > p.total_pages(total)) {
            pagination.update(|p| p.clamp(total));
        }
    });

    view! {
        <div class="pager">
            <label class="pager__size">
                "Rows"
                <select
                    prop:value=move || pagination.get().per_page.to_string()
                    on:change=move |ev| {
                        if let Ok(size) = event_target_value(&ev).parse::<usize>() {
                            pagination.update(|p| p.set_per_page(size));
                        }
                    }
                >
                    {PAGE_SIZES
                        .iter()
                        .map(|size| view! { <option value=size.to_string()>{size.to_string()}</option> })
                        .collect_view()}
                </select>
            </label>
            <span class="pager__range">{move || pagination.get().range_label(total.get())}</span>
            <button
                class="btn pager__prev"
                disabled=move || !pagination.get().has_prev()
                on:click=move |_| pagination.update(|p| p.page = p.page.saturating_sub(1).max(1))
            >
                "Previous"
            </button>
            <span class="pager__page">
                {move || format!("Page {} of {}", pagination.get().page, pagination.get().total_pages(total.get()))}
            </span>
            <button
                class="btn pager__next"
                disabled=move || !pagination.get().has_next(total.get())
                on:click=move |_| pagination.update(|p| p.page += 1)
            >
                "Next"
            </button>
        </div>
    }
}
