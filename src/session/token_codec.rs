//! Unverified JWT payload decoding for expiry and claim display.
//!
//! Decodes the base64url middle segment of a token to read `exp` and other
//! claims. It never verifies a signature: the backend is the sole authority
//! on whether a token is actually valid, and a server-side rejection always
//! wins over the local expiry heuristic. Anything malformed is treated as
//! expired (fail closed) and never raises past this boundary.

#[cfg(test)]
#[path = "token_codec_test.rs"]
mod token_codec_test;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

/// Decode the claims object from a token's payload segment.
///
/// Returns `None` unless the token is exactly three `.`-separated segments
/// whose middle segment is base64url-encoded JSON.
pub fn decode_claims(token: &str) -> Option<serde_json::Value> {
    let parts: Vec<&str> = token.split('.').collect();
    if parts.len() != 3 {
        return None;
    }
    let decoded = URL_SAFE_NO_PAD.decode(parts[1]).ok()?;
    serde_json::from_slice(&decoded).ok()
}

/// The numeric `exp` claim in seconds since the Unix epoch, if present.
pub fn expiry(token: &str) -> Option<u64> {
    decode_claims(token)?.get("exp")?.as_u64()
}

/// Whether `token` is expired as of `now_secs`.
///
/// A token with no parseable `exp` is expired. `exp == now` counts as still
/// valid; expiry is strictly `exp < now`.
pub fn is_expired_at(token: &str, now_secs: u64) -> bool {
    match expiry(token) {
        Some(exp) => exp < now_secs,
        None => true,
    }
}

/// Whether `token` is expired against the current wall clock.
pub fn is_expired(token: &str) -> bool {
    is_expired_at(token, now_secs())
}

fn now_secs() -> u64 {
    #[cfg(feature = "hydrate")]
    {
        (js_sys::Date::now() / 1000.0) as u64
    }
    #[cfg(not(feature = "hydrate"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0)
    }
}
