use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::ports::AuthorizationError;
use crate::application::services::RelayError;
use crate::presentation::upload_decoder::DecodeError;

const UPSTREAM_FALLBACK_MESSAGE: &str = "OpenAI API error";

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Every failure the relay can answer with. Each maps to exactly one JSON error response.
#[derive(Debug)]
pub enum ApiError {
    MethodNotAllowed,
    Configuration,
    SubscriptionRequired,
    MissingAudio,
    PayloadTooLarge,
    Upstream { status: u16, message: Option<String> },
    Timeout,
    Internal,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Configuration | ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::SubscriptionRequired => StatusCode::FORBIDDEN,
            ApiError::MissingAudio => StatusCode::BAD_REQUEST,
            ApiError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::Upstream { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            ApiError::Timeout => StatusCode::REQUEST_TIMEOUT,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ApiError::MethodNotAllowed => "Method not allowed",
            ApiError::Configuration => "Server configuration error",
            ApiError::SubscriptionRequired => "Subscription required",
            ApiError::MissingAudio => "No audio file provided",
            ApiError::PayloadTooLarge => "Audio file too large",
            ApiError::Upstream { message, .. } => message
                .as_deref()
                .filter(|m| !m.is_empty())
                .unwrap_or(UPSTREAM_FALLBACK_MESSAGE),
            ApiError::Timeout => "Request timeout",
            ApiError::Internal => "Internal server error",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status(),
            Json(ErrorResponse {
                error: self.message().to_string(),
            }),
        )
            .into_response()
    }
}

impl From<RelayError> for ApiError {
    fn from(error: RelayError) -> Self {
        match error {
            RelayError::Configuration => ApiError::Configuration,
            RelayError::MissingAudio => ApiError::MissingAudio,
            RelayError::Upstream { status, message } => ApiError::Upstream { status, message },
            RelayError::Timeout => ApiError::Timeout,
            RelayError::Unclassified(_) => ApiError::Internal,
        }
    }
}

impl From<DecodeError> for ApiError {
    fn from(error: DecodeError) -> Self {
        match error {
            DecodeError::TooLarge => ApiError::PayloadTooLarge,
            DecodeError::NotMultipart(_) | DecodeError::Malformed(_) => ApiError::Internal,
        }
    }
}

impl From<AuthorizationError> for ApiError {
    fn from(_: AuthorizationError) -> Self {
        ApiError::Internal
    }
}
