use bytes::Bytes;

use super::parsed_upload::ParsedUpload;

pub const DEFAULT_AUDIO_FILENAME: &str = "audio.m4a";
pub const DEFAULT_AUDIO_MIME_TYPE: &str = "audio/m4a";
pub const DEFAULT_MODEL: &str = "whisper-1";

/// The request forwarded to the transcription API, with every default resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct TranscriptionRequest {
    pub audio: Bytes,
    pub filename: String,
    pub mime_type: String,
    pub model: String,
    pub prompt: Option<String>,
}

impl TranscriptionRequest {
    /// Returns `None` when the upload carried no audio file.
    pub fn from_upload(upload: ParsedUpload) -> Option<Self> {
        let model = upload.model().unwrap_or(DEFAULT_MODEL).to_string();
        let prompt = upload.prompt().map(str::to_string);
        let (_, audio) = upload.into_parts();
        let audio = audio?;

        Some(Self {
            audio: audio.bytes,
            filename: audio
                .filename
                .unwrap_or_else(|| DEFAULT_AUDIO_FILENAME.to_string()),
            mime_type: audio
                .mime_type
                .unwrap_or_else(|| DEFAULT_AUDIO_MIME_TYPE.to_string()),
            model,
            prompt,
        })
    }
}
