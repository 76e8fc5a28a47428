use async_trait::async_trait;

use crate::domain::{ApiCredential, TranscriptionRequest};

#[async_trait]
pub trait TranscriptionEngine: Send + Sync {
    async fn transcribe(
        &self,
        credential: &ApiCredential,
        request: &TranscriptionRequest,
    ) -> Result<String, TranscriptionError>;
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum TranscriptionError {
    #[error("upstream returned status {status}: {}", .message.as_deref().unwrap_or("no message"))]
    Upstream { status: u16, message: Option<String> },
    #[error("upstream request timed out")]
    Timeout,
    #[error("api request failed: {0}")]
    RequestFailed(String),
    #[error("invalid upstream response: {0}")]
    InvalidResponse(String),
}
