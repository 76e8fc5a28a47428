use bytes::Bytes;

/// The single audio file captured from an upload.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioAsset {
    pub filename: Option<String>,
    pub mime_type: Option<String>,
    pub bytes: Bytes,
}

impl AudioAsset {
    pub fn new(filename: Option<String>, mime_type: Option<String>, bytes: Bytes) -> Self {
        Self {
            filename: filename.filter(|f| !f.is_empty()),
            mime_type: mime_type.filter(|m| !m.is_empty()),
            bytes,
        }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}
