mod api_credential;
mod audio_asset;
mod caller_identity;
mod parsed_upload;
mod transcription_request;

pub use api_credential::ApiCredential;
pub use audio_asset::AudioAsset;
pub use caller_identity::{CALLER_ID_HEADER, CallerIdentity};
pub use parsed_upload::{MODEL_FIELD, PROMPT_FIELD, ParsedUpload};
pub use transcription_request::{
    DEFAULT_AUDIO_FILENAME, DEFAULT_AUDIO_MIME_TYPE, DEFAULT_MODEL, TranscriptionRequest,
};
