use axum::Json;
use axum::extract::{FromRequest, Multipart, Request, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::presentation::error::ApiError;
use crate::presentation::request_gate::{self, GateDecision};
use crate::presentation::state::AppState;
use crate::presentation::upload_decoder::{DecodeError, decode_upload};

#[derive(Debug, Serialize)]
pub struct TranscriptionResponse {
    pub text: String,
}

/// Gate, decode, relay. Every outcome becomes exactly one response.
#[tracing::instrument(skip_all, fields(method = %request.method()))]
pub async fn transcribe_handler(State(state): State<AppState>, request: Request) -> Response {
    match relay(&state, request).await {
        Ok(response) => response,
        Err(e) => {
            tracing::debug!(status = %e.status(), error = e.message(), "Request rejected");
            e.into_response()
        }
    }
}

async fn relay(state: &AppState, request: Request) -> Result<Response, ApiError> {
    match request_gate::evaluate(request.method()) {
        GateDecision::Preflight => return Ok(request_gate::preflight_response()),
        GateDecision::Reject => {
            tracing::warn!("Unsupported method");
            return Err(ApiError::MethodNotAllowed);
        }
        GateDecision::Proceed => {}
    }

    let credential = state.transcription_service.credential()?;

    let caller = request_gate::caller_identity(request.headers());
    let allowed = state.authorizer.authorize(&caller).await.map_err(|e| {
        tracing::error!(error = %e, "Authorization check failed");
        ApiError::from(e)
    })?;
    if !allowed {
        tracing::warn!(caller = ?caller.id(), "Caller not authorized");
        return Err(ApiError::SubscriptionRequired);
    }

    let upload = match Multipart::from_request(request, state).await {
        Ok(multipart) => decode_upload(multipart).await,
        Err(rejection) => Err(DecodeError::from(rejection)),
    }
    .map_err(|e| {
        tracing::error!(error = %e, "Failed to decode upload");
        ApiError::from(e)
    })?;

    let text = state
        .transcription_service
        .transcribe(&credential, upload)
        .await?;

    Ok((StatusCode::OK, Json(TranscriptionResponse { text })).into_response())
}
