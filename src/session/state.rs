//! Session state published to route guards and user-aware components.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use crate::net::types::User;

/// The client-side record of who is logged in and whether that login is
/// still considered valid.
///
/// Invariant: `user.is_some()` implies `authenticated`. The reverse does not
/// hold during the window between accepting a stored token and the profile
/// fetch resolving.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionState {
    /// Profile fetched from the backend; replaced wholesale, never merged.
    pub user: Option<User>,
    /// True iff a non-expired token is held in the token store.
    pub authenticated: bool,
    /// True only while the startup restoration attempt is in flight.
    pub loading: bool,
}

impl Default for SessionState {
    /// State at process start, before `restore()` has resolved. Route guards
    /// must treat this as "no decision yet", not as logged-out.
    fn default() -> Self {
        Self {
            user: None,
            authenticated: false,
            loading: true,
        }
    }
}

impl SessionState {
    /// The settled logged-out state: no user, no token, restoration done.
    pub fn anonymous() -> Self {
        Self {
            user: None,
            authenticated: false,
            loading: false,
        }
    }
}
