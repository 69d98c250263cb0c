use super::*;

// =============================================================
// SessionState defaults
// =============================================================

#[test]
fn default_state_is_loading() {
    let state = SessionState::default();
    assert!(state.loading);
    assert!(state.user.is_none());
    assert!(!state.authenticated);
}

#[test]
fn anonymous_state_is_settled() {
    let state = SessionState::anonymous();
    assert!(!state.loading);
    assert!(state.user.is_none());
    assert!(!state.authenticated);
}

#[test]
fn default_and_anonymous_differ_only_in_loading() {
    let mut booting = SessionState::default();
    booting.loading = false;
    assert_eq!(booting, SessionState::anonymous());
}
