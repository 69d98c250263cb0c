use super::*;
use crate::net::types::User;

fn user() -> User {
    User {
        id: "u1".to_owned(),
        email: "a@x.com".to_owned(),
        name: None,
        avatar: None,
    }
}

// =============================================================
// Guard decision table
// =============================================================

#[test]
fn loading_state_makes_no_decision() {
    let state = SessionState::default();
    assert_eq!(decide(&state), GuardDecision::Pending);
}

#[test]
fn loading_wins_even_when_flags_look_authenticated() {
    let state = SessionState {
        user: Some(user()),
        authenticated: true,
        loading: true,
    };
    assert_eq!(decide(&state), GuardDecision::Pending);
}

#[test]
fn settled_authenticated_user_is_allowed() {
    let state = SessionState {
        user: Some(user()),
        authenticated: true,
        loading: false,
    };
    assert_eq!(decide(&state), GuardDecision::Allow);
}

#[test]
fn settled_anonymous_redirects_to_login() {
    assert_eq!(
        decide(&SessionState::anonymous()),
        GuardDecision::RedirectToLogin
    );
}

#[test]
fn authenticated_without_profile_redirects() {
    // Provisional flag with no resolved user does not unlock content.
    let state = SessionState {
        user: None,
        authenticated: true,
        loading: false,
    };
    assert_eq!(decide(&state), GuardDecision::RedirectToLogin);
}
