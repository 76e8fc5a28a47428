use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart;
use serde::Deserialize;

use crate::application::ports::{TranscriptionEngine, TranscriptionError};
use crate::domain::{ApiCredential, DEFAULT_AUDIO_MIME_TYPE, TranscriptionRequest};
use crate::infrastructure::observability::sanitize_prompt;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

pub struct OpenAiWhisperEngine {
    client: reqwest::Client,
    endpoint: String,
    timeout: Duration,
}

impl OpenAiWhisperEngine {
    pub fn new(base_url: Option<String>, timeout: Duration) -> Self {
        let base_url = base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Self {
            client: reqwest::Client::new(),
            endpoint: format!("{}/audio/transcriptions", base_url.trim_end_matches('/')),
            timeout,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[derive(Deserialize)]
struct WhisperTranscriptionResponse {
    text: String,
}

#[derive(Deserialize)]
struct WhisperErrorResponse {
    error: WhisperErrorDetail,
}

#[derive(Deserialize)]
struct WhisperErrorDetail {
    message: Option<String>,
}

fn map_reqwest_error(stage: &str, e: reqwest::Error) -> TranscriptionError {
    if e.is_timeout() {
        return TranscriptionError::Timeout;
    }
    TranscriptionError::RequestFailed(format!("{}: {}", stage, e))
}

fn audio_part(request: &TranscriptionRequest) -> Result<multipart::Part, TranscriptionError> {
    let part = || {
        multipart::Part::stream_with_length(
            reqwest::Body::from(request.audio.clone()),
            request.audio.len() as u64,
        )
        .file_name(request.filename.clone())
    };

    match part().mime_str(&request.mime_type) {
        Ok(p) => Ok(p),
        Err(e) => {
            tracing::warn!(
                mime_type = %request.mime_type,
                error = %e,
                "Client supplied an invalid MIME type, falling back to default"
            );
            part()
                .mime_str(DEFAULT_AUDIO_MIME_TYPE)
                .map_err(|e| TranscriptionError::RequestFailed(format!("mime: {}", e)))
        }
    }
}

#[async_trait]
impl TranscriptionEngine for OpenAiWhisperEngine {
    async fn transcribe(
        &self,
        credential: &ApiCredential,
        request: &TranscriptionRequest,
    ) -> Result<String, TranscriptionError> {
        let mut form = multipart::Form::new()
            .part("file", audio_part(request)?)
            .text("model", request.model.clone());

        if let Some(prompt) = &request.prompt {
            form = form.text("prompt", prompt.clone());
        }

        tracing::debug!(
            model = %request.model,
            prompt = %request.prompt.as_deref().map(sanitize_prompt).unwrap_or_default(),
            "Sending audio to OpenAI Whisper API"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(credential.expose())
            .multipart(form)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| map_reqwest_error("request", e))?;

        let status = response.status();
        if !status.is_success() {
            let body = match response.text().await {
                Ok(body) => body,
                Err(e) if e.is_timeout() => return Err(TranscriptionError::Timeout),
                Err(e) => {
                    tracing::debug!(error = %e, "Failed to read upstream error body");
                    String::new()
                }
            };
            let message = serde_json::from_str::<WhisperErrorResponse>(&body)
                .ok()
                .and_then(|r| r.error.message);
            tracing::warn!(status = status.as_u16(), "OpenAI Whisper API returned an error");
            return Err(TranscriptionError::Upstream {
                status: status.as_u16(),
                message,
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| map_reqwest_error("body", e))?;
        let result: WhisperTranscriptionResponse = serde_json::from_slice(&body)
            .map_err(|e| TranscriptionError::InvalidResponse(format!("parse response: {}", e)))?;

        tracing::info!(
            chars = result.text.len(),
            "OpenAI Whisper transcription completed"
        );

        Ok(result.text)
    }
}
