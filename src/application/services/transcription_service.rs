use std::sync::Arc;

use crate::application::ports::{CredentialSource, TranscriptionEngine, TranscriptionError};
use crate::domain::{ApiCredential, ParsedUpload, TranscriptionRequest};

pub struct TranscriptionService {
    engine: Arc<dyn TranscriptionEngine>,
    credentials: Arc<dyn CredentialSource>,
}

impl TranscriptionService {
    pub fn new(
        engine: Arc<dyn TranscriptionEngine>,
        credentials: Arc<dyn CredentialSource>,
    ) -> Self {
        Self {
            engine,
            credentials,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.credentials.credential().is_some()
    }

    /// Resolves the upstream credential. Checked before the request body is read.
    pub fn credential(&self) -> Result<ApiCredential, RelayError> {
        self.credentials.credential().ok_or_else(|| {
            tracing::error!("Transcription API key not configured");
            RelayError::Configuration
        })
    }

    pub async fn transcribe(
        &self,
        credential: &ApiCredential,
        upload: ParsedUpload,
    ) -> Result<String, RelayError> {
        let request = TranscriptionRequest::from_upload(upload).ok_or(RelayError::MissingAudio)?;

        tracing::debug!(
            filename = %request.filename,
            mime_type = %request.mime_type,
            model = %request.model,
            bytes = request.audio.len(),
            has_prompt = request.prompt.is_some(),
            "Relaying audio to transcription API"
        );

        let text = self
            .engine
            .transcribe(credential, &request)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Transcription error");
                RelayError::from(e)
            })?;

        tracing::info!(chars = text.len(), "Transcription relayed");

        Ok(text)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    #[error("transcription API key not configured")]
    Configuration,
    #[error("no audio file provided")]
    MissingAudio,
    #[error("upstream error {status}")]
    Upstream { status: u16, message: Option<String> },
    #[error("upstream request timed out")]
    Timeout,
    #[error("unclassified failure: {0}")]
    Unclassified(String),
}

impl From<TranscriptionError> for RelayError {
    fn from(error: TranscriptionError) -> Self {
        match error {
            TranscriptionError::Upstream { status, message } => Self::Upstream { status, message },
            TranscriptionError::Timeout => Self::Timeout,
            other => Self::Unclassified(other.to_string()),
        }
    }
}
