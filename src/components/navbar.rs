//! Top navigation bar with session-aware links and logout.

use leptos::prelude::*;

use crate::session::SessionContext;

/// Site-wide navigation bar.
///
/// Shows login/register links while anonymous and the account name plus a
/// logout button once a session is established.
#[component]
pub fn NavBar() -> impl IntoView {
    let session = SessionContext::expect();
    let state = session.signal();

    let display_name = move || {
        state
            .get()
            .user
            .map_or_else(String::new, |u| u.name.unwrap_or(u.email))
    };
    let logged_in = move || state.get().user.is_some();

    let on_logout = move |_| {
        session.logout();
        // Navigate to login via window.location for a clean state.
        #[cfg(feature = "hydrate")]
        {
            if let Some(w) = web_sys::window() {
                let _ = w.location().set_href("/login");
            }
        }
    };

    view! {
        <nav class="navbar">
            <a href="/" class="navbar__brand">
                "Bazar"
            </a>
            <span class="navbar__spacer"></span>
            <Show
                when=logged_in
                fallback=|| {
                    view! {
                        <a href="/login" class="navbar__link">
                            "Login"
                        </a>
                        <a href="/register" class="navbar__link">
                            "Register"
                        </a>
                    }
                }
            >
                <a href="/profile" class="navbar__user">
                    {display_name}
                </a>
                <button class="btn navbar__logout" on:click=on_logout>
                    "Logout"
                </button>
            </Show>
        </nav>
    }
}
