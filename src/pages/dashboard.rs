//! Dashboard: greeting, accessible pages and the customer count.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::actions::Services;
use crate::components::app_shell::AppShell;
use crate::net::api::Resource;
use crate::net::types::Contact;
use crate::state::cache::QueryKey;
use crate::state::dashboard::DashboardStats;
use crate::state::session::SessionState;

/// `Good morning` / `Good afternoon` / `Good evening` by local hour.
pub fn greeting(hour: u32) -> &'static str {
    match hour {
        0..=11 => "Good morning",
        12..=16 => "Good afternoon",
        _ => "Good evening",
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let services = Services::expect();
    let session = services.session;
    let stats = RwSignal::new(None::<DashboardStats>);

    let cache = services.cache;
    let version = Memo::new(move |_| cache.with(|c| c.version(QueryKey::DashboardStats)));
    let api = services.api;
    Effect::new(move || {
        let issued = version.get();
        let client = api.client();
        leptos::task::spawn_local(async move {
            let result = client.list::<Contact>(Resource::Contacts).await;
            if !cache.with_untracked(|c| c.is_current(QueryKey::DashboardStats, issued)) {
                return;
            }
            stats.set(Some(DashboardStats::from_contacts(&result)));
        });
    });

    let hour = {
        use chrono::Timelike as _;
        chrono::Local::now().hour()
    };

    view! {
        <AppShell title="Dashboard">
            <section class="dashboard">
                <div class="dashboard__welcome">
                    <h1>{move || format!("{}, {}", greeting(hour), session.with(SessionState::display_name))}</h1>
                    <p class="dashboard__company">
                        {move || session.with(SessionState::company_name).unwrap_or_else(|| "No company selected".to_owned())}
                    </p>
                </div>
                <div class="dashboard__cards">
                    <div class="stat-card">
                        <span class="stat-card__label">"Total Customers"</span>
                        <span class="stat-card__value">
                            {move || stats.get().map_or_else(|| "...".to_owned(), |s| s.total_customers.to_string())}
                        </span>
                    </div>
                </div>
                <div class="dashboard__rights">
                    <h3>"Your Access"</h3>
                    {move || {
                        let pages: Vec<String> = session
                            .with(|s| s.allowed_pages().iter().map(|r| r.menu_name.clone().unwrap_or_else(|| r.page_name.clone())).collect());
                        if pages.is_empty() {
                            view! { <p class="dashboard__empty">"No page rights assigned."</p> }.into_any()
                        } else {
                            view! {
                                <ul class="dashboard__right-list">
                                    {pages.into_iter().map(|name| view! { <li>{name}</li> }).collect_view()}
                                </ul>
                            }
                                .into_any()
                        }
                    }}
                </div>
            </section>
        </AppShell>
    }
}
