use std::sync::Mutex;

use async_trait::async_trait;

use crate::application::ports::{TranscriptionEngine, TranscriptionError};
use crate::domain::{ApiCredential, TranscriptionRequest};

/// Engine that answers with a canned result and records every request it receives.
pub struct MockTranscriptionEngine {
    result: Result<String, TranscriptionError>,
    calls: Mutex<Vec<TranscriptionRequest>>,
}

impl MockTranscriptionEngine {
    pub fn returning(text: &str) -> Self {
        Self::with_result(Ok(text.to_string()))
    }

    pub fn failing(error: TranscriptionError) -> Self {
        Self::with_result(Err(error))
    }

    pub fn with_result(result: Result<String, TranscriptionError>) -> Self {
        Self {
            result,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<TranscriptionRequest> {
        self.calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().map(|calls| calls.len()).unwrap_or(0)
    }
}

#[async_trait]
impl TranscriptionEngine for MockTranscriptionEngine {
    async fn transcribe(
        &self,
        _credential: &ApiCredential,
        request: &TranscriptionRequest,
    ) -> Result<String, TranscriptionError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(request.clone());
        }
        self.result.clone()
    }
}
