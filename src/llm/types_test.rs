use super::*;
use crate::error::ErrorCode;

#[test]
fn turn_role_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&TurnRole::User).unwrap(), "\"user\"");
    assert_eq!(serde_json::to_string(&TurnRole::Model).unwrap(), "\"model\"");
}

#[test]
fn turn_constructors_set_role() {
    assert_eq!(Turn::user("hi").role, TurnRole::User);
    assert_eq!(Turn::model("hello").role, TurnRole::Model);
}

#[test]
fn api_request_errors_are_retryable() {
    let err = LlmError::ApiRequest("connection refused".into());
    assert!(err.retryable());
    assert_eq!(err.error_code(), "E_API_REQUEST");
}

#[test]
fn server_errors_are_retryable_client_errors_are_not() {
    let server = LlmError::ApiResponse { status: 503, body: String::new() };
    assert!(server.retryable());

    let rate_limited = LlmError::ApiResponse { status: 429, body: String::new() };
    assert!(rate_limited.retryable());

    let bad_request = LlmError::ApiResponse { status: 400, body: String::new() };
    assert!(!bad_request.retryable());
}

#[test]
fn parse_errors_are_terminal() {
    let err = LlmError::ApiParse("unexpected eof".into());
    assert!(!err.retryable());
    assert_eq!(err.error_code(), "E_API_PARSE");
}
