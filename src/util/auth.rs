//! Route guard for the protected screens.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected route applies the same decision: a non-empty token renders
//! the screen, anything else goes back to the landing page. There is no
//! server round-trip; expiry surfaces later as an ordinary API error.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::SessionState;

pub const PUBLIC_ROUTE: &str = "/";
pub const HOME_ROUTE: &str = "/dashboard";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Render,
    Redirect(&'static str),
}

pub fn guard(session: &SessionState) -> GuardDecision {
    if session.is_authenticated() {
        GuardDecision::Render
    } else {
        GuardDecision::Redirect(PUBLIC_ROUTE)
    }
}

/// Redirect to the landing page whenever the session has no token.
pub fn install_unauth_redirect<F>(session: RwSignal<SessionState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let GuardDecision::Redirect(to) = session.with(guard) {
            navigate(to, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}
