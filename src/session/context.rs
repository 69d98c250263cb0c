//! Leptos glue binding the session controller to the view tree.
//!
//! DESIGN
//! ======
//! The published state lives in an `RwSignal<SessionState>` provided as
//! context from `<App/>` — a dependency-injected instance, not a module
//! global, so each app (and each test) owns its session. Async operations
//! run a controller against the browser token store and the REST profile
//! fetcher, then publish the resulting state with `try_set`: if the reactive
//! owner was torn down while a request was in flight, the late resolution is
//! a no-op.
//!
//! Operations are not serialized here; the pages disable their submit
//! controls while a call is pending, and overlapping calls otherwise resolve
//! last-writer-wins.

use leptos::prelude::*;

use crate::net::api::ApiProfileFetcher;
use crate::net::types::AuthPayload;

use super::controller::SessionController;
use super::state::SessionState;
use super::token_store::BrowserTokenStore;
use super::SessionError;

/// Handle to the application-wide session, cheap to copy into closures.
#[derive(Clone, Copy)]
pub struct SessionContext {
    state: RwSignal<SessionState>,
}

impl SessionContext {
    /// Create the session and provide it as context. Called once from `<App/>`.
    pub fn provide() -> Self {
        let ctx = Self {
            state: RwSignal::new(SessionState::default()),
        };
        provide_context(ctx);
        ctx
    }

    /// Fetch the session context provided by `<App/>`.
    ///
    /// # Panics
    ///
    /// Panics if no `<App/>` ancestor provided the session.
    pub fn expect() -> Self {
        expect_context::<Self>()
    }

    /// The reactive state signal, for guard effects and display bindings.
    pub fn signal(self) -> RwSignal<SessionState> {
        self.state
    }

    /// Kick off the startup restoration task. Runs once, from a mount
    /// effect; on the server the session simply stays in its pending state.
    pub fn start_restore(self) {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                let mut ctl = self.controller();
                ctl.restore().await;
                self.state.try_set(ctl.into_state());
            });
        }
    }

    /// Establish a session from an auth payload and publish the result.
    ///
    /// # Errors
    ///
    /// Propagates `SessionError` from the controller; on `MissingToken` the
    /// published state is left untouched.
    pub async fn login(self, payload: AuthPayload) -> Result<(), SessionError> {
        let mut ctl = self.controller();
        let result = ctl.login(payload).await;
        if result != Err(SessionError::MissingToken) {
            self.state.try_set(ctl.into_state());
        }
        result
    }

    /// Clear the session and publish the anonymous state.
    pub fn logout(self) {
        let mut ctl = self.controller();
        ctl.logout();
        self.state.try_set(ctl.into_state());
    }

    /// Transport-reported invalid session (401 after restoration).
    ///
    /// Same sink as `logout`: storage cleared, anonymous state published;
    /// the guard effect then routes to the login entry point. The transport
    /// itself never navigates.
    pub fn invalidated(self) {
        self.logout();
    }

    fn controller(self) -> SessionController<BrowserTokenStore, ApiProfileFetcher> {
        SessionController::with_state(
            BrowserTokenStore,
            ApiProfileFetcher::default(),
            self.state.get_untracked(),
        )
    }
}
