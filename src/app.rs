//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::navbar::NavBar;
use crate::pages::{
    home::HomePage, login::LoginPage, profile::ProfilePage, register::RegisterPage,
};
use crate::session::SessionContext;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session context and sets up client-side routing. Session
/// restoration is kicked off exactly once from a mount effect; until it
/// resolves, the published state stays `loading` and guarded routes render
/// their pending view instead of redirecting.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = SessionContext::provide();

    // Mount effects run once on the client; the body tracks no signals, so
    // restore fires a single time per app instance.
    Effect::new(move || {
        session.start_restore();
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/bazar.css"/>
        <Title text="Bazar"/>

        <Router>
            <NavBar/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=StaticSegment("profile") view=ProfilePage/>
            </Routes>
        </Router>
    }
}
