use crate::shared::files::file_extension;

pub const MIN_FILE_BYTES: usize = 100;
pub const MAX_FILE_BYTES: usize = 10 * 1024 * 1024;

const ALLOWED_CONTENT_TYPES: [&str; 3] = [
    "application/pdf",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
];

const ALLOWED_EXTENSIONS: [&str; 3] = ["pdf", "doc", "docx"];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResumeRejection {
    #[error("Unsupported resume content type: {0}")]
    InvalidContentType(String),

    #[error("Unsupported resume file extension: {0}")]
    InvalidExtension(String),

    #[error("Resume file exceeds the 10 MB limit")]
    TooLarge,

    #[error("Resume file is too small to be a valid document")]
    TooSmall,
}

/// The uppercased extension to store as the file format, or why the upload
/// is refused.
pub fn validate(
    original_name: &str,
    content_type: &str,
    size: usize,
) -> Result<String, ResumeRejection> {
    if !ALLOWED_CONTENT_TYPES.contains(&content_type) {
        return Err(ResumeRejection::InvalidContentType(content_type.to_string()));
    }

    let extension = file_extension(original_name)
        .map(str::to_lowercase)
        .unwrap_or_default();
    if !ALLOWED_EXTENSIONS.contains(&extension.as_str()) {
        return Err(ResumeRejection::InvalidExtension(extension));
    }

    if size > MAX_FILE_BYTES {
        return Err(ResumeRejection::TooLarge);
    }
    if size < MIN_FILE_BYTES {
        return Err(ResumeRejection::TooSmall);
    }

    Ok(extension.to_uppercase())
}
