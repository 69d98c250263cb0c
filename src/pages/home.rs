//! Public landing page.

use leptos::prelude::*;

use crate::session::SessionContext;

/// Home page — public marketplace landing with session-aware call to action.
#[component]
pub fn HomePage() -> impl IntoView {
    let state = SessionContext::expect().signal();
    let logged_in = move || state.get().user.is_some();

    view! {
        <div class="home-page">
            <h1>"Bazar"</h1>
            <p class="home-page__tagline">
                "Buy, sell, and review books and goods with people near you."
            </p>
            <Show
                when=logged_in
                fallback=|| {
                    view! {
                        <a href="/login" class="btn btn--primary">
                            "Login to get started"
                        </a>
                    }
                }
            >
                <a href="/profile" class="btn btn--primary">
                    "Go to your profile"
                </a>
            </Show>
        </div>
    }
}
