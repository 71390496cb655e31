use super::*;

#[test]
fn from_api_prefers_service_message() {
    let err = WorkflowError::from_api(ApiError::Rejected(Some("Board exists".to_owned())), "Failed");
    assert_eq!(err, WorkflowError::Rejected("Board exists".to_owned()));
    assert_eq!(err.to_string(), "Board exists");
}

#[test]
fn from_api_uses_fallback_without_message() {
    let err = WorkflowError::from_api(ApiError::Rejected(None), "Parse failed");
    assert_eq!(err.to_string(), "Parse failed");
}

#[test]
fn from_api_keeps_network_failures_generic() {
    let err = WorkflowError::from_api(ApiError::Network("connection reset".to_owned()), "Failed");
    assert_eq!(err.to_string(), "Network error: connection reset");
    assert!(!err.is_terminal());
}

#[test]
fn auth_errors_are_terminal() {
    let err = WorkflowError::Auth("access_denied".to_owned());
    assert!(err.is_terminal());
    assert_eq!(err.to_string(), "Auth failed: access_denied");
}
