use super::*;

// =============================================================
// Status classification
// =============================================================

#[test]
fn unauthorized_statuses_map_to_unauthorized() {
    assert_eq!(status_error(401), ApiError::Unauthorized(401));
    assert_eq!(status_error(403), ApiError::Unauthorized(403));
}

#[test]
fn other_statuses_keep_their_code() {
    assert_eq!(status_error(404), ApiError::Status(404));
    assert_eq!(status_error(500), ApiError::Status(500));
}

// =============================================================
// Uniform failure policy
// =============================================================

#[test]
fn missing_or_rejected_session_reauthenticates() {
    assert_eq!(
        failure_action(&ApiError::NoSession),
        FailureAction::Reauthenticate
    );
    assert_eq!(
        failure_action(&ApiError::Unauthorized(401)),
        FailureAction::Reauthenticate
    );
    assert_eq!(
        failure_action(&ApiError::Unauthorized(403)),
        FailureAction::Reauthenticate
    );
}

#[test]
fn everything_else_gives_up() {
    for error in [
        ApiError::Status(500),
        ApiError::Network("connection refused".into()),
        ApiError::Decode("missing field".into()),
        ApiError::Unsupported,
    ] {
        assert_eq!(failure_action(&error), FailureAction::GiveUp, "{error}");
    }
}

#[test]
fn policy_matches_status_classification() {
    // A 401 fetched from the wire ends in a redirect; a 500 does not.
    assert_eq!(
        failure_action(&status_error(401)),
        FailureAction::Reauthenticate
    );
    assert_eq!(failure_action(&status_error(500)), FailureAction::GiveUp);
}

// =============================================================
// Error display
// =============================================================

#[test]
fn error_messages_name_the_status() {
    assert_eq!(
        ApiError::Unauthorized(401).to_string(),
        "session rejected by the server (401)"
    );
    assert_eq!(
        ApiError::Status(500).to_string(),
        "request failed with status 500"
    );
}
