use super::*;

#[test]
fn bearer_formats_authorization_value() {
    assert_eq!(bearer("abc.def.ghi"), "Bearer abc.def.ghi");
}

#[test]
fn status_401_maps_to_unauthorized() {
    assert_eq!(error_for_status(401), ApiError::Unauthorized);
}

#[test]
fn other_statuses_map_to_status_errors() {
    assert_eq!(error_for_status(500), ApiError::Status(500));
    assert_eq!(error_for_status(404), ApiError::Status(404));
}

#[test]
fn error_display_is_stable_for_ui_copy() {
    assert_eq!(ApiError::Unauthorized.to_string(), "unauthorized");
    assert_eq!(ApiError::Status(503).to_string(), "request failed: 503");
    assert_eq!(
        ApiError::Network("offline".to_owned()).to_string(),
        "network error: offline"
    );
}

#[test]
fn endpoint_paths_match_backend_routes() {
    assert_eq!(LOGIN_PATH, "/login");
    assert_eq!(REGISTER_PATH, "/register");
    assert_eq!(PROFILE_PATH, "/profile");
}
