use axum::http::{HeaderMap, Method, StatusCode, header};
use axum::response::{IntoResponse, Response};

use crate::domain::{CALLER_ID_HEADER, CallerIdentity};

pub const ALLOWED_METHOD: &str = "POST";
pub const ALLOWED_HEADERS: &str = "Content-Type";
pub const PREFLIGHT_MAX_AGE_SECS: &str = "3600";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    Preflight,
    Reject,
    Proceed,
}

pub fn evaluate(method: &Method) -> GateDecision {
    if method == Method::OPTIONS {
        GateDecision::Preflight
    } else if method == Method::POST {
        GateDecision::Proceed
    } else {
        GateDecision::Reject
    }
}

/// Empty 204 answer to a CORS preflight. The allow-origin header is added router-wide.
pub fn preflight_response() -> Response {
    (
        StatusCode::NO_CONTENT,
        [
            (header::ACCESS_CONTROL_ALLOW_METHODS, ALLOWED_METHOD),
            (header::ACCESS_CONTROL_ALLOW_HEADERS, ALLOWED_HEADERS),
            (header::ACCESS_CONTROL_MAX_AGE, PREFLIGHT_MAX_AGE_SECS),
        ],
    )
        .into_response()
}

pub fn caller_identity(headers: &HeaderMap) -> CallerIdentity {
    CallerIdentity::new(
        headers
            .get(CALLER_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(String::from),
    )
}
