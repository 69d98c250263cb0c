//! Session controller: login, logout, and startup restoration.
//!
//! DESIGN
//! ======
//! The controller is an owned instance over two collaborators — the token
//! store and a profile fetcher — plus the published `SessionState`. It is
//! the only writer of both the token slot and the session state, so the
//! `authenticated` flag can never drift from what storage holds once an
//! operation has settled.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use crate::net::api::ApiError;
use crate::net::types::{AuthPayload, User};

use super::state::SessionState;
use super::token_codec;
use super::token_store::TokenStore;
use super::SessionError;

/// Fetches the authenticated user's profile from the backend.
///
/// The server's verdict is authoritative: a rejection here outranks any
/// local expiry heuristic and resolves the session to anonymous.
pub trait ProfileFetcher {
    fn fetch_profile(&self) -> impl Future<Output = Result<User, ApiError>>;
}

/// Orchestrates the session lifecycle over a token store and profile fetcher.
pub struct SessionController<S, F> {
    store: S,
    fetcher: F,
    state: SessionState,
}

impl<S: TokenStore, F: ProfileFetcher> SessionController<S, F> {
    /// Create a controller in the process-start state (`loading = true`).
    pub fn new(store: S, fetcher: F) -> Self {
        Self::with_state(store, fetcher, SessionState::default())
    }

    /// Create a controller resuming from a previously published state.
    pub fn with_state(store: S, fetcher: F, state: SessionState) -> Self {
        Self {
            store,
            fetcher,
            state,
        }
    }

    /// The current session state.
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Consume the controller, yielding the state to publish.
    pub fn into_state(self) -> SessionState {
        self.state
    }

    /// Startup restoration: re-establish a session from the stored token.
    ///
    /// Invoked exactly once at process start. A missing or expired token, or
    /// a failed profile fetch, all resolve to the anonymous state with the
    /// slot cleared — externally indistinguishable from never having logged
    /// in. Always ends with `loading = false`; until then, readers must not
    /// treat `authenticated` as final.
    pub async fn restore(&mut self) {
        let live_token = self
            .store
            .get()
            .filter(|token| !token_codec::is_expired(token));

        match live_token {
            Some(_) => {
                self.state.authenticated = true;
                let fetched = self.fetcher.fetch_profile().await;
                match fetched {
                    Ok(user) => self.state.user = Some(user),
                    Err(_) => self.logout(),
                }
            }
            None => self.logout(),
        }
        self.state.loading = false;
    }

    /// Establish a session from an auth payload.
    ///
    /// Persists the token and marks the session authenticated. The profile
    /// comes from the payload when supplied inline; otherwise it is fetched,
    /// and a fetch failure rolls everything back to anonymous as if the
    /// login never happened, surfacing the failure to the caller.
    ///
    /// # Errors
    ///
    /// `SessionError::MissingToken` if no token is extractable (state is
    /// left untouched); `SessionError::ProfileFetch` on a rolled-back fetch
    /// failure.
    pub async fn login(&mut self, payload: AuthPayload) -> Result<(), SessionError> {
        let Some(token) = payload.token() else {
            return Err(SessionError::MissingToken);
        };

        self.store.set(token);
        self.state.authenticated = true;

        match payload.user {
            Some(user) => {
                self.state.user = Some(user);
                Ok(())
            }
            None => {
                let fetched = self.fetcher.fetch_profile().await;
                match fetched {
                    Ok(user) => {
                        self.state.user = Some(user);
                        Ok(())
                    }
                    Err(err) => {
                        self.logout();
                        Err(SessionError::ProfileFetch(err))
                    }
                }
            }
        }
    }

    /// Drop the session: clear the token slot and reset to logged-out.
    ///
    /// Idempotent; calling it while already anonymous changes nothing.
    pub fn logout(&mut self) {
        self.store.remove();
        self.state.user = None;
        self.state.authenticated = false;
    }
}
