//! Top bar: fiscal year and company pickers plus the user menu.
//!
//! The pickers only change what the bar shows; no request carries the
//! selection. Signing out clears the session and the shell's guard takes the
//! router back to the landing page.

#[cfg(test)]
#[path = "top_bar_test.rs"]
mod top_bar_test;

use leptos::prelude::*;

use crate::app::{ApiContext, notify_info, pending, spawn_guarded};
use crate::state::inflight::{InFlight, Operation};
use crate::state::notify::Notifications;
use crate::state::session::SessionState;
use crate::util::storage::app_store;

pub const FISCAL_YEARS: &[&str] = &["2025 - 2026", "2024 - 2025"];

pub const COMPANIES: &[&str] = &["Sunrise ERP (Demo)", "Tailor Shop A"];

/// Two-letter badge for the user menu button.
pub fn initials(name: &str) -> String {
    let mut words = name.split_whitespace();
    let letters: String = match (words.next(), words.next()) {
        (Some(first), Some(second)) => first.chars().take(1).chain(second.chars().take(1)).collect(),
        (Some(only), None) => only.chars().take(2).collect(),
        _ => String::new(),
    };
    if letters.is_empty() { "U".to_owned() } else { letters.to_uppercase() }
}

#[component]
pub fn TopBar(title: &'static str) -> impl IntoView {
    let api = expect_context::<ApiContext>();
    let session = expect_context::<RwSignal<SessionState>>();
    let inflight = expect_context::<RwSignal<InFlight>>();
    let notify = expect_context::<RwSignal<Notifications>>();

    let year = RwSignal::new(FISCAL_YEARS[0].to_owned());
    let company = RwSignal::new(
        session.with_untracked(SessionState::company_name).unwrap_or_else(|| COMPANIES[0].to_owned()),
    );
    let menu_open = RwSignal::new(false);
    let signing_out = pending(inflight, Operation::Logout);

    let company_options = move || {
        let current = company.get();
        let mut options: Vec<String> = COMPANIES.iter().map(|c| (*c).to_owned()).collect();
        if !options.contains(&current) {
            options.insert(0, current);
        }
        options
    };

    let on_sign_out = move |_| {
        menu_open.set(false);
        let request = session.with_untracked(SessionState::logout_request);
        let client = api.client();
        spawn_guarded(inflight, Operation::Logout, async move {
            if let Some(request) = request {
                if let Err(e) = client.logout(&request).await {
                    log::warn!("logout request failed: {e}");
                }
            }
            session.set(SessionState::clear(&mut app_store()));
            notify_info(notify, "Logged Out", "You have been signed out.");
        });
    };

    view! {
        <header class="top-bar">
            <h2 class="top-bar__title">{title}</h2>
            <span class="top-bar__spacer"></span>
            <label class="top-bar__picker" title="Fiscal Year">
                <select
                    prop:value=move || year.get()
                    on:change=move |ev| year.set(event_target_value(&ev))
                >
                    {FISCAL_YEARS
                        .iter()
                        .map(|y| view! { <option value=*y>{*y}</option> })
                        .collect_view()}
                </select>
            </label>
            <label class="top-bar__picker top-bar__picker--company" title="Select Company">
                <select
                    prop:value=move || company.get()
                    on:change=move |ev| company.set(event_target_value(&ev))
                >
                    {move || {
                        company_options()
                            .into_iter()
                            .map(|c| { let v = c.clone(); view! { <option value=v>{c}</option> } })
                            .collect_view()
                    }}
                </select>
            </label>
            <div class="top-bar__user">
                <button
                    class="top-bar__avatar"
                    title=move || session.with(SessionState::display_name)
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                >
                    {move || session.with(|s| initials(&s.display_name()))}
                </button>
                <div class="top-bar__menu" class:top-bar__menu--open=move || menu_open.get()>
                    <div class="top-bar__menu-label">{move || session.with(SessionState::display_name)}</div>
                    <button class="top-bar__menu-item top-bar__menu-item--danger" disabled=signing_out on:click=on_sign_out>
                        "Sign Out"
                    </button>
                </div>
            </div>
        </header>
    }
}
