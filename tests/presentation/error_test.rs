use axum::http::StatusCode;
use axum::response::IntoResponse;
use transcribe_relay::application::services::RelayError;
use transcribe_relay::presentation::ApiError;
use transcribe_relay::presentation::upload_decoder::DecodeError;

#[test]
fn given_relay_errors_when_mapping_then_status_codes_follow_taxonomy() {
    let cases = [
        (RelayError::Configuration, StatusCode::INTERNAL_SERVER_ERROR),
        (RelayError::MissingAudio, StatusCode::BAD_REQUEST),
        (RelayError::Timeout, StatusCode::REQUEST_TIMEOUT),
        (
            RelayError::Unclassified("boom".to_string()),
            StatusCode::INTERNAL_SERVER_ERROR,
        ),
        (
            RelayError::Upstream {
                status: 401,
                message: None,
            },
            StatusCode::UNAUTHORIZED,
        ),
    ];

    for (error, expected) in cases {
        assert_eq!(ApiError::from(error).status(), expected);
    }
}

#[test]
fn given_unrepresentable_upstream_status_when_mapping_then_returns_bad_gateway() {
    let error = ApiError::Upstream {
        status: 42,
        message: Some("odd".to_string()),
    };
    assert_eq!(error.status(), StatusCode::BAD_GATEWAY);
    assert_eq!(error.message(), "odd");
}

#[test]
fn given_empty_upstream_message_when_mapping_then_uses_generic_message() {
    let error = ApiError::Upstream {
        status: 400,
        message: Some(String::new()),
    };
    assert_eq!(error.message(), "OpenAI API error");
}

#[test]
fn given_decode_errors_when_mapping_then_only_size_is_client_facing() {
    assert_eq!(
        ApiError::from(DecodeError::TooLarge).status(),
        StatusCode::PAYLOAD_TOO_LARGE
    );
    assert_eq!(
        ApiError::from(DecodeError::Malformed("eof".to_string())).message(),
        "Internal server error"
    );
}

#[tokio::test]
async fn given_api_error_when_rendering_then_body_is_json_error_object() {
    let response = ApiError::MethodNotAllowed.into_response();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(body.as_ref(), br#"{"error":"Method not allowed"}"#);
}
