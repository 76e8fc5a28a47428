use std::collections::HashMap;

use super::audio_asset::AudioAsset;

pub const MODEL_FIELD: &str = "model";
pub const PROMPT_FIELD: &str = "prompt";

/// Text fields and the first audio file decoded from a multipart upload.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedUpload {
    fields: HashMap<String, String>,
    audio: Option<AudioAsset>,
}

impl ParsedUpload {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a text field. A repeated name overwrites the earlier value.
    pub fn insert_field(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(name.into(), value.into());
    }

    /// Keeps the first audio file only. Returns `false` when the asset was discarded.
    pub fn attach_audio(&mut self, asset: AudioAsset) -> bool {
        if self.audio.is_some() {
            return false;
        }
        self.audio = Some(asset);
        true
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    pub fn fields(&self) -> &HashMap<String, String> {
        &self.fields
    }

    pub fn model(&self) -> Option<&str> {
        self.field(MODEL_FIELD).filter(|m| !m.is_empty())
    }

    pub fn prompt(&self) -> Option<&str> {
        self.field(PROMPT_FIELD).filter(|p| !p.is_empty())
    }

    pub fn audio(&self) -> Option<&AudioAsset> {
        self.audio.as_ref()
    }

    pub fn has_audio(&self) -> bool {
        self.audio.is_some()
    }

    pub fn into_parts(self) -> (HashMap<String, String>, Option<AudioAsset>) {
        (self.fields, self.audio)
    }
}
