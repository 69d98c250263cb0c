//! Login page with a controlled email/password form.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

use crate::net::types::LoginRequest;

/// Login page — submits credentials, establishes the session, and navigates
/// to the profile on success.
///
/// The submit button stays disabled while a request is in flight so session
/// operations never overlap.
#[component]
pub fn LoginPage() -> impl IntoView {
    #[cfg(feature = "hydrate")]
    let session = crate::session::SessionContext::expect();
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

        let req = LoginRequest {
            email: email.get_untracked().trim().to_owned(),
            password: password.get_untracked(),
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
                let outcome = match crate::net::api::login(&req).await {
                    Ok(payload) => session.login(payload).await.map_err(|e| e.to_string()),
                    Err(e) => Err(e.to_string()),
                };
                pending.try_set(false);
                match outcome {
                    Ok(()) => {
                        navigate("/profile", leptos_router::NavigateOptions::default());
                    }
                    Err(message) => {
                        error.try_set(Some(message));
                    }
                }
            });
        }
    };

    view! {
        <div class="auth-page">
            <form class="auth-page__form" on:submit=on_submit>
                <h2>"Login"</h2>

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
                        placeholder="Enter your password"
                        prop:value=password
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>

                <Show when=move || error.get().is_some()>
                    <p class="auth-page__error">{move || error.get().unwrap_or_default()}</p>
                </Show>

                <button type="submit" class="btn btn--primary" disabled=move || pending.get()>
                    {move || if pending.get() { "Logging in..." } else { "Login" }}
                </button>

                <p class="auth-page__alt">
                    "No account yet? " <a href="/register">"Register"</a>
                </p>
            </form>
        </div>
    }
}
