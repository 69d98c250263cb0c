//! REST API helpers for communicating with the backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, with the bearer
//! token read from the shared token store on every signed request. Server
//! side (SSR): stubs returning errors, since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `ApiError` values instead of panics. A 401 maps to
//! `ApiError::Unauthorized` and nothing more — this layer never clears the
//! token and never navigates; the session layer owns both reactions.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use thiserror::Error;

use crate::session::controller::ProfileFetcher;
#[cfg(feature = "hydrate")]
use crate::session::token_store::{BrowserTokenStore, TokenStore};

use super::types::{AuthPayload, LoginRequest, RegisterRequest, User};

/// Path for `POST` login credentials.
pub const LOGIN_PATH: &str = "/login";
/// Path for `POST` new-account registration.
pub const REGISTER_PATH: &str = "/register";
/// Path for `GET` the authenticated user's profile.
pub const PROFILE_PATH: &str = "/profile";

/// Failures from the REST transport.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ApiError {
    /// The server rejected the session (HTTP 401).
    #[error("unauthorized")]
    Unauthorized,
    /// Any other non-success HTTP status.
    #[error("request failed: {0}")]
    Status(u16),
    /// The request never completed (connectivity, CORS, teardown).
    #[error("network error: {0}")]
    Network(String),
    /// The response body was not the expected shape.
    #[error("malformed response: {0}")]
    Decode(String),
}

/// Map a non-success HTTP status to the matching error value.
pub fn error_for_status(status: u16) -> ApiError {
    if status == 401 {
        ApiError::Unauthorized
    } else {
        ApiError::Status(status)
    }
}

/// `Authorization` header value for a bearer token.
pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Exchange credentials for an auth payload via `POST /login`.
///
/// # Errors
///
/// `ApiError` on connectivity failure, non-2xx status, or a malformed body.
pub async fn login(req: &LoginRequest) -> Result<AuthPayload, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(LOGIN_PATH)
            .json(req)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(error_for_status(resp.status()));
        }
        resp.json::<AuthPayload>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = req;
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Create an account via `POST /register`.
///
/// # Errors
///
/// `ApiError` on connectivity failure, non-2xx status, or a malformed body.
pub async fn register(req: &RegisterRequest) -> Result<AuthPayload, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(REGISTER_PATH)
            .json(req)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(error_for_status(resp.status()));
        }
        resp.json::<AuthPayload>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = req;
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Fetch the authenticated user's profile via `GET /profile`, signed with
/// the stored bearer token.
///
/// # Errors
///
/// `ApiError::Unauthorized` when the server rejects the token; other
/// `ApiError` values for transport and decode failures.
pub async fn fetch_profile() -> Result<User, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let mut request = gloo_net::http::Request::get(PROFILE_PATH);
        if let Some(token) = BrowserTokenStore.get() {
            request = request.header("Authorization", &bearer(&token));
        }
        let resp = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(error_for_status(resp.status()));
        }
        resp.json::<User>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Production profile fetcher used by the session controller.
#[derive(Clone, Copy, Debug, Default)]
pub struct ApiProfileFetcher;

impl ProfileFetcher for ApiProfileFetcher {
    async fn fetch_profile(&self) -> Result<User, ApiError> {
        fetch_profile().await
    }
}
