//! Customer review tile that expands on hover.

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Review {
    pub quote: &'static str,
    pub full_review: &'static str,
    pub department: &'static str,
}

#[component]
pub fn ReviewCard(review: Review) -> impl IntoView {
    let expanded = RwSignal::new(false);

    view! {
        <div
            class="review-card"
            on:mouseenter=move |_| expanded.set(true)
            on:mouseleave=move |_| expanded.set(false)
        >
            <p class="review-card__quote">{format!("\"{}\"", review.quote)}</p>
            <p class="review-card__department">{review.department}</p>
            <div class="review-card__panel" class:review-card__panel--open=move || expanded.get()>
                <p>{review.full_review}</p>
                <p class="review-card__department">{review.department}</p>
            </div>
        </div>
    }
}
