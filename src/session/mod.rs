//! Session/auth lifecycle manager.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module owns the bearer token, the current user, and the derived
//! authentication flag for the whole application. Everything else consumes
//! the published `{user, authenticated, loading}` tuple plus `login`/`logout`;
//! no other module mutates session state or touches the token slot directly.
//!
//! ERROR HANDLING
//! ==============
//! Malformed tokens, failed profile fetches, and server-side 401s all drain
//! into the same sink: storage cleared, anonymous state. Errors reach callers
//! as values for display, never as panics and never as silent retries.

pub mod context;
pub mod controller;
pub mod guard;
pub mod state;
pub mod token_codec;
pub mod token_store;

use thiserror::Error;

use crate::net::api::ApiError;

/// Failures surfaced by session operations.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum SessionError {
    /// The login payload carried no usable bearer token.
    #[error("no token in auth payload")]
    MissingToken,
    /// The profile fetch after storing a token failed; the session has been
    /// rolled back to anonymous.
    #[error("profile fetch failed: {0}")]
    ProfileFetch(ApiError),
}

pub use context::SessionContext;
pub use controller::{ProfileFetcher, SessionController};
pub use guard::GuardDecision;
pub use state::SessionState;
pub use token_store::TokenStore;
