use super::*;

// =============================================================
// AuthPayload token extraction
// =============================================================

#[test]
fn auth_payload_token_present() {
    let payload = AuthPayload::from_token("abc.def.ghi");
    assert_eq!(payload.token(), Some("abc.def.ghi"));
}

#[test]
fn auth_payload_token_absent() {
    let payload = AuthPayload::default();
    assert_eq!(payload.token(), None);
}

#[test]
fn auth_payload_empty_token_treated_as_absent() {
    let payload = AuthPayload {
        token: Some(String::new()),
        user: None,
    };
    assert_eq!(payload.token(), None);
}

// =============================================================
// Wire shapes
// =============================================================

#[test]
fn auth_payload_parses_token_only_body() {
    let payload: AuthPayload = serde_json::from_str(r#"{"token":"t"}"#).unwrap();
    assert_eq!(payload.token(), Some("t"));
    assert!(payload.user.is_none());
}

#[test]
fn auth_payload_parses_token_and_user_body() {
    let body = r#"{"token":"t","user":{"id":"u1","email":"a@x.com"}}"#;
    let payload: AuthPayload = serde_json::from_str(body).unwrap();
    let user = payload.user.expect("inline user");
    assert_eq!(user.id, "u1");
    assert_eq!(user.email, "a@x.com");
    assert!(user.name.is_none());
}

#[test]
fn user_serializes_without_empty_optionals() {
    let user = User {
        id: "u1".to_owned(),
        email: "a@x.com".to_owned(),
        name: None,
        avatar: None,
    };
    let json = serde_json::to_string(&user).unwrap();
    assert_eq!(json, r#"{"id":"u1","email":"a@x.com"}"#);
}

#[test]
fn register_request_includes_optional_name() {
    let req = RegisterRequest {
        email: "a@x.com".to_owned(),
        password: "pw".to_owned(),
        name: Some("Ana".to_owned()),
    };
    let json = serde_json::to_string(&req).unwrap();
    assert!(json.contains(r#""name":"Ana""#));
}
