//! Route guarding for protected pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components should apply identical unauthenticated redirect behavior,
//! and none of them may redirect while startup restoration is still in
//! flight — before `loading` clears, the session flags are provisional.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use super::state::SessionState;

/// What a protected route should do with the current session state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Restoration still in flight; render a neutral pending view and make
    /// no access decision.
    Pending,
    /// Render the protected content.
    Allow,
    /// Send the user to the login entry point.
    RedirectToLogin,
}

/// Pure guard policy over the published session tuple.
pub fn decide(state: &SessionState) -> GuardDecision {
    if state.loading {
        GuardDecision::Pending
    } else if state.authenticated && state.user.is_some() {
        GuardDecision::Allow
    } else {
        GuardDecision::RedirectToLogin
    }
}

/// Redirect to `/login` whenever the guard settles on denial.
pub fn install_login_redirect<F>(session: RwSignal<SessionState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let navigate = navigate.clone();
    Effect::new(move || {
        if decide(&session.get()) == GuardDecision::RedirectToLogin {
            navigate("/login", NavigateOptions::default());
        }
    });
}
