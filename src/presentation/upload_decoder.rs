use axum::extract::Multipart;
use axum::extract::multipart::{Field, MultipartError, MultipartRejection};
use axum::http::StatusCode;
use bytes::BytesMut;

use crate::domain::{AudioAsset, ParsedUpload};

#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("request is not multipart/form-data: {0}")]
    NotMultipart(String),
    #[error("request body exceeds the upload limit")]
    TooLarge,
    #[error("malformed multipart body: {0}")]
    Malformed(String),
}

impl From<MultipartError> for DecodeError {
    fn from(error: MultipartError) -> Self {
        if error.status() == StatusCode::PAYLOAD_TOO_LARGE {
            DecodeError::TooLarge
        } else {
            DecodeError::Malformed(error.body_text())
        }
    }
}

impl From<MultipartRejection> for DecodeError {
    fn from(rejection: MultipartRejection) -> Self {
        DecodeError::NotMultipart(rejection.body_text())
    }
}

/// Drains a multipart body into text fields and the first non-empty file part.
///
/// Parts carrying a filename are files. Once audio is captured, later files are read
/// to the end and dropped. Repeated text fields overwrite earlier values. The caller
/// decides what a missing audio file means.
pub async fn decode_upload(mut multipart: Multipart) -> Result<ParsedUpload, DecodeError> {
    let mut upload = ParsedUpload::new();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();

        let Some(filename) = field.file_name().map(str::to_string) else {
            let value = field.text().await?;
            upload.insert_field(name, value);
            continue;
        };

        if upload.has_audio() {
            let discarded = drain_file_part(field).await?;
            tracing::debug!(
                field = %name,
                filename = %filename,
                bytes = discarded,
                "Discarding additional file part"
            );
            continue;
        }

        let mime_type = field.content_type().map(str::to_string);
        let bytes = read_file_part(field).await?;

        if bytes.is_empty() {
            tracing::debug!(field = %name, filename = %filename, "Ignoring empty file part");
            continue;
        }

        tracing::debug!(
            field = %name,
            filename = %filename,
            bytes = bytes.len(),
            "Audio file received"
        );
        upload.attach_audio(AudioAsset::new(Some(filename), mime_type, bytes.freeze()));
    }

    Ok(upload)
}

async fn read_file_part(mut field: Field<'_>) -> Result<BytesMut, DecodeError> {
    let mut buffer = BytesMut::new();
    while let Some(chunk) = field.chunk().await? {
        buffer.extend_from_slice(&chunk);
    }
    Ok(buffer)
}

async fn drain_file_part(mut field: Field<'_>) -> Result<usize, DecodeError> {
    let mut drained = 0;
    while let Some(chunk) = field.chunk().await? {
        drained += chunk.len();
    }
    Ok(drained)
}
