//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` owns the shared signals (session, query cache, in-flight guard,
//! notifications) and the build-time configuration. Screens read them with
//! `expect_context` and talk to the backend through [`ApiContext::client`].

use std::future::Future;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::toast_host::ToastHost;
use crate::config::AppConfig;
use crate::net::api::{ApiClient, ApiError};
use crate::pages::{
    contacts::ContactsPage, customers::CustomersPage, dashboard::DashboardPage, landing::LandingPage,
    measurements::MeasurementsPage, not_found::NotFoundPage, tailoring_items::TailoringItemsPage, users::UsersPage,
};
use crate::state::cache::QueryCache;
use crate::state::inflight::{InFlight, Operation};
use crate::state::notify::Notifications;
use crate::state::session::SessionState;
use crate::util::storage::app_store;

/// Handle for building API clients bound to the live session token.
#[derive(Clone, Copy)]
pub struct ApiContext {
    config: StoredValue<AppConfig>,
    session: RwSignal<SessionState>,
}

impl ApiContext {
    pub fn client(&self) -> ApiClient {
        let base = self.config.with_value(|c| c.api_base_url.clone());
        ApiClient::new(base, self.session.with_untracked(|s| s.token.clone()))
    }

    pub fn config(&self) -> AppConfig {
        self.config.get_value()
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = AppConfig::from_build_env();
    log::info!("api base url {}", config.api_base_url);

    let session = RwSignal::new(SessionState::load(&app_store()));
    let cache = RwSignal::new(QueryCache::default());
    let inflight = RwSignal::new(InFlight::default());
    let notify = RwSignal::new(Notifications::default());

    provide_context(ApiContext { config: StoredValue::new(config), session });
    provide_context(session);
    provide_context(cache);
    provide_context(inflight);
    provide_context(notify);

    view! {
        <Title text="TailorShop ERP"/>

        <Router>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route path=StaticSegment("") view=LandingPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
                <Route path=StaticSegment("users") view=UsersPage/>
                <Route path=StaticSegment("measurements") view=MeasurementsPage/>
                <Route path=StaticSegment("tailoring-items") view=TailoringItemsPage/>
                <Route path=StaticSegment("contacts") view=ContactsPage/>
                <Route path=StaticSegment("customers") view=CustomersPage/>
            </Routes>
        </Router>
        <ToastHost/>
    }
}

/// Run `task` under the in-flight guard for `op`. A call while `op` is
/// already pending is dropped.
pub fn spawn_guarded<F>(inflight: RwSignal<InFlight>, op: Operation, task: F)
where
    F: Future<Output = ()> + 'static,
{
    let mut admitted = false;
    inflight.update(|f| admitted = f.try_begin(op));
    if !admitted {
        return;
    }
    leptos::task::spawn_local(async move {
        task.await;
        inflight.update(|f| f.finish(op));
    });
}

/// Reactive "is `op` running" flag for disabling submit buttons.
pub fn pending(inflight: RwSignal<InFlight>, op: Operation) -> impl Fn() -> bool + Copy + Send + Sync + 'static {
    move || inflight.with(|f| f.is_pending(op))
}

/// Show a failed request as a destructive toast.
pub fn notify_failure(notify: RwSignal<Notifications>, title: &str, err: &ApiError, fallback: &str) {
    let message = err.user_message(fallback);
    notify.update(|n| {
        n.error(title, &message);
    });
}

/// Show an informational toast.
pub fn notify_info(notify: RwSignal<Notifications>, title: &str, description: &str) {
    notify.update(|n| {
        n.info(title, description);
    });
}
