use std::sync::Arc;

use crate::application::ports::Authorizer;
use crate::application::services::TranscriptionService;

#[derive(Clone)]
pub struct AppState {
    pub transcription_service: Arc<TranscriptionService>,
    pub authorizer: Arc<dyn Authorizer>,
    /// Largest accepted request body in bytes. `0` disables the limit.
    pub max_upload_bytes: usize,
}
