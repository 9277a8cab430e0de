//! Public landing page with the login card.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only unguarded route. Once the session holds a token (after login, or
//! on a reload with a stored one) the page moves on to the dashboard.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::landing::{Footer, Header, Hero, LoginSection, TrustSection};
use crate::state::session::SessionState;
use crate::util::auth::{GuardDecision, HOME_ROUTE, guard};

#[component]
pub fn LandingPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    Effect::new(move || {
        if session.with(guard) == GuardDecision::Render {
            navigate(HOME_ROUTE, NavigateOptions::default());
        }
    });

    view! {
        <div class="landing">
            <Header/>
            <main>
                <Hero/>
                <LoginSection/>
                <TrustSection/>
            </main>
            <Footer/>
        </div>
    }
}
