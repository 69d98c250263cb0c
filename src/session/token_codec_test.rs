use super::*;

/// Mint an unsigned three-segment token with the given claims object.
fn make_token(claims: &serde_json::Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"none","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(claims.to_string().as_bytes());
    format!("{header}.{payload}.sig")
}

/// A token whose `exp` is `offset_secs` away from the current wall clock.
fn token_expiring_in(offset_secs: i64) -> String {
    let now = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_secs() as i64;
    make_token(&serde_json::json!({ "exp": now + offset_secs, "sub": "u1" }))
}

// =============================================================
// decode_claims on malformed input
// =============================================================

#[test]
fn decode_rejects_non_jwt_strings() {
    for junk in ["", "abc", "a.b", "a.b.c.d", "not a token at all"] {
        assert_eq!(decode_claims(junk), None, "accepted {junk:?}");
        assert!(is_expired(junk), "treated {junk:?} as live");
    }
}

#[test]
fn decode_rejects_non_base64_payload() {
    assert_eq!(decode_claims("aaa.!!!.ccc"), None);
}

#[test]
fn decode_rejects_non_json_payload() {
    let payload = URL_SAFE_NO_PAD.encode(b"plain text");
    assert_eq!(decode_claims(&format!("aaa.{payload}.ccc")), None);
}

#[test]
fn decode_reads_claims_object() {
    let token = make_token(&serde_json::json!({ "exp": 1_700_000_000, "sub": "u1" }));
    let claims = decode_claims(&token).expect("claims");
    assert_eq!(claims["sub"], "u1");
    assert_eq!(claims["exp"], 1_700_000_000);
}

// =============================================================
// Expiry semantics
// =============================================================

#[test]
fn expiry_reads_numeric_exp() {
    let token = make_token(&serde_json::json!({ "exp": 42 }));
    assert_eq!(expiry(&token), Some(42));
}

#[test]
fn missing_exp_is_expired() {
    let token = make_token(&serde_json::json!({ "sub": "u1" }));
    assert_eq!(expiry(&token), None);
    assert!(is_expired_at(&token, 0));
}

#[test]
fn non_numeric_exp_is_expired() {
    let token = make_token(&serde_json::json!({ "exp": "soon" }));
    assert!(is_expired_at(&token, 0));
}

#[test]
fn exp_in_the_past_is_expired() {
    let token = make_token(&serde_json::json!({ "exp": 999 }));
    assert!(is_expired_at(&token, 1000));
}

#[test]
fn exp_in_the_future_is_not_expired() {
    let token = make_token(&serde_json::json!({ "exp": 1001 }));
    assert!(!is_expired_at(&token, 1000));
}

#[test]
fn wall_clock_expiry_matches_offsets() {
    assert!(!is_expired(&token_expiring_in(3600)));
    assert!(is_expired(&token_expiring_in(-3600)));
}
