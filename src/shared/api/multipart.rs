// src/shared/api/multipart.rs
use actix_multipart::Multipart;
use futures::{StreamExt, TryStreamExt};

/// A fully buffered upload taken from the `file` multipart field.
///
/// Assets here are small (10 MiB cap) and end up as database blobs, so
/// buffering the whole payload is fine.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub original_file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum MultipartReadError {
    #[error("No file field found in the request")]
    MissingFile,

    /// Transport-level failure while draining the upload stream. Maps to
    /// 500, unlike validation rejections.
    #[error("Error reading upload stream: {0}")]
    ReadFailure(String),
}

pub async fn read_file_field(mut payload: Multipart) -> Result<UploadedFile, MultipartReadError> {
    loop {
        let mut field = match payload.try_next().await {
            Ok(Some(field)) => field,
            Ok(None) => return Err(MultipartReadError::MissingFile),
            Err(err) => return Err(MultipartReadError::ReadFailure(err.to_string())),
        };

        if field.name() != Some("file") {
            continue;
        }

        let original_file_name = field
            .content_disposition()
            .and_then(|cd| cd.get_filename())
            .unwrap_or_default()
            .to_string();

        let content_type = field
            .content_type()
            .map(|mime| mime.to_string())
            .unwrap_or_default();

        let mut bytes = Vec::new();
        while let Some(chunk) = field.next().await {
            let chunk = chunk.map_err(|err| MultipartReadError::ReadFailure(err.to_string()))?;
            bytes.extend_from_slice(&chunk);
        }

        return Ok(UploadedFile {
            original_file_name,
            content_type,
            bytes,
        });
    }
}
