//! Profile page for the authenticated user.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::session::guard::{self, GuardDecision};
use crate::session::SessionContext;

/// Profile page — guarded; shows the resolved account identity.
///
/// While restoration is pending it renders a neutral loading view and makes
/// no access decision; once the session settles anonymous, the guard effect
/// redirects to `/login`.
#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = SessionContext::expect();
    let state = session.signal();
    let navigate = use_navigate();

    guard::install_login_redirect(state, navigate);

    let on_logout = move |_| session.logout();

    view! {
        <div class="profile-page">
            {move || match guard::decide(&state.get()) {
                GuardDecision::Pending => view! { <p class="profile-page__pending">"Loading..."</p> }.into_any(),
                GuardDecision::RedirectToLogin => ().into_any(),
                // `Allow` implies a resolved user; the None arm is unreachable
                // but rendered as empty rather than panicking.
                GuardDecision::Allow => match state.get().user {
                    None => ().into_any(),
                    Some(user) => view! {
                        <div class="profile-page__card">
                            <h2>{user.name.clone().unwrap_or_else(|| user.email.clone())}</h2>
                            <p class="profile-page__email">{user.email.clone()}</p>
                            <button class="btn" on:click=on_logout>
                                "Logout"
                            </button>
                        </div>
                    }
                        .into_any(),
                },
            }}
        </div>
    }
}
