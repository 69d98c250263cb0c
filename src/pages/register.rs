//! Registration page for new accounts.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

use crate::net::types::RegisterRequest;

/// Register page — creates an account, then either adopts the returned
/// session directly (when the backend answers with a token) or sends the
/// user to the login form.
#[component]
pub fn RegisterPage() -> impl IntoView {
    #[cfg(feature = "hydrate")]
    let session = crate::session::SessionContext::expect();
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(Option::<String>::None);
    let pending = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }

        let display_name = name.get_untracked().trim().to_owned();
        let req = RegisterRequest {
            email: email.get_untracked().trim().to_owned(),
            password: password.get_untracked(),
            name: (!display_name.is_empty()).then_some(display_name),
        };
        if req.email.is_empty() || req.password.is_empty() {
            error.set(Some("Email and password are required".to_owned()));
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            pending.set(true);
            error.set(None);
            leptos::task::spawn_local(async move {
                match crate::net::api::register(&req).await {
                    Ok(payload) if payload.token().is_some() => {
                        let outcome = session.login(payload).await;
                        pending.try_set(false);
                        match outcome {
                            Ok(()) => {
                                navigate("/profile", leptos_router::NavigateOptions::default());
                            }
                            Err(e) => {
                                error.try_set(Some(e.to_string()));
                            }
                        }
                    }
                    Ok(_) => {
                        pending.try_set(false);
                        navigate("/login", leptos_router::NavigateOptions::default());
                    }
                    Err(e) => {
                        pending.try_set(false);
                        error.try_set(Some(e.to_string()));
                    }
                }
            });
        }
    };

    view! {
        <div class="auth-page">
            <form class="auth-page__form" on:submit=on_submit>
                <h2>"Register"</h2>

                <label class="auth-page__field">
                    "Name"
                    <input
                        type="text"
                        placeholder="Display name (optional)"
                        prop:value=name
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </label>

                <label class="auth-page__field">
                    "Email"
                    <input
                        type="email"
                        placeholder="Enter your email"
                        prop:value=email
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>

                <label class="auth-page__field">
                    "Password"
                    <input
                        type="password"
                        placeholder="Choose a password"
                        prop:value=password
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>

                <Show when=move || error.get().is_some()>
                    <p class="auth-page__error">{move || error.get().unwrap_or_default()}</p>
                </Show>

                <button type="submit" class="btn btn--primary" disabled=move || pending.get()>
                    {move || if pending.get() { "Creating account..." } else { "Register" }}
                </button>

                <p class="auth-page__alt">
                    "Already registered? " <a href="/login">"Login"</a>
                </p>
            </form>
        </div>
    }
}
