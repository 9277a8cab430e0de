//! Authenticated layout: sidebar, top bar and the screen body.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected page renders inside `AppShell`, which applies the route
//! guard. Without a session token the body is never rendered and the router
//! is sent back to the landing page.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::sidebar::Sidebar;
use crate::components::top_bar::TopBar;
use crate::state::session::SessionState;
use crate::util::auth::{GuardDecision, guard, install_unauth_redirect};

#[component]
pub fn AppShell(title: &'static str, children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    install_unauth_redirect(session, use_navigate());

    view! {
        <Show
            when=move || session.with(guard) == GuardDecision::Render
            fallback=|| view! { <div class="app-shell__redirect">"Redirecting to login..."</div> }
        >
            <div class="app-shell">
                <Sidebar/>
                <div class="app-shell__main">
                    <TopBar title=title/>
                    <main class="app-shell__content">{children()}</main>
                </div>
            </div>
        </Show>
    }
}
