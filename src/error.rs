//! Structured API errors.
//!
//! DESIGN
//! ======
//! Every service error carries a grepable code and a retryable flag via
//! the `ErrorCode` trait. Route modules map service errors to HTTP
//! statuses and emit a uniform JSON error body, so clients never parse
//! freeform message strings.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Grepable error code and retryable flag for structured error bodies.
pub trait ErrorCode: std::fmt::Display {
    fn error_code(&self) -> &'static str;

    fn retryable(&self) -> bool {
        false
    }
}

/// Render an error as `{ "message", "code", "retryable" }` with the
/// given status.
pub fn error_response(status: StatusCode, err: &(impl ErrorCode + ?Sized)) -> Response {
    let body = Json(json!({
        "message": err.to_string(),
        "code": err.error_code(),
        "retryable": err.retryable(),
    }));
    (status, body).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Dummy;

    impl std::fmt::Display for Dummy {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "something broke")
        }
    }

    impl ErrorCode for Dummy {
        fn error_code(&self) -> &'static str {
            "E_DUMMY"
        }
    }

    #[test]
    fn error_response_carries_status() {
        let resp = error_response(StatusCode::CONFLICT, &Dummy);
        assert_eq!(resp.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn retryable_defaults_to_false() {
        assert!(!Dummy.retryable());
    }
}
