use crate::shared::files::file_extension;

pub const MIN_FILE_BYTES: usize = 100;
pub const MAX_FILE_BYTES: usize = 5 * 1024 * 1024;
pub const MIN_DIMENSION: u32 = 100;
pub const MAX_DIMENSION: u32 = 4000;

const ALLOWED_CONTENT_TYPES: [&str; 4] = ["image/jpeg", "image/jpg", "image/png", "image/webp"];

const ALLOWED_EXTENSIONS: [&str; 4] = ["jpg", "jpeg", "png", "webp"];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PhotoRejection {
    #[error("Unsupported photo content type: {0}")]
    InvalidContentType(String),

    #[error("Unsupported photo file extension: {0}")]
    InvalidExtension(String),

    #[error("Photo exceeds the 5 MB limit")]
    TooLarge,

    #[error("Photo is too small to be a valid image")]
    TooSmall,

    #[error("Photo bytes could not be decoded as an image")]
    NotAnImage,

    #[error("Photo dimensions are below {MIN_DIMENSION}x{MIN_DIMENSION}")]
    DimensionsTooSmall,

    #[error("Photo dimensions exceed {MAX_DIMENSION}x{MAX_DIMENSION}")]
    DimensionsTooLarge,
}

/// Metadata extracted from an accepted photo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcceptedPhoto {
    pub file_format: String,
    pub width: u32,
    pub height: u32,
}

pub fn validate(
    original_name: &str,
    content_type: &str,
    bytes: &[u8],
) -> Result<AcceptedPhoto, PhotoRejection> {
    if !ALLOWED_CONTENT_TYPES.contains(&content_type) {
        return Err(PhotoRejection::InvalidContentType(content_type.to_string()));
    }

    let extension = file_extension(original_name)
        .map(str::to_lowercase)
        .unwrap_or_default();
    if !ALLOWED_EXTENSIONS.contains(&extension.as_str()) {
        return Err(PhotoRejection::InvalidExtension(extension));
    }

    if bytes.len() > MAX_FILE_BYTES {
        return Err(PhotoRejection::TooLarge);
    }
    if bytes.len() < MIN_FILE_BYTES {
        return Err(PhotoRejection::TooSmall);
    }

    // Decoding also catches valid-looking headers on truncated payloads.
    let decoded = image::load_from_memory(bytes).map_err(|_| PhotoRejection::NotAnImage)?;
    let (width, height) = (decoded.width(), decoded.height());

    if width < MIN_DIMENSION || height < MIN_DIMENSION {
        return Err(PhotoRejection::DimensionsTooSmall);
    }
    if width > MAX_DIMENSION || height > MAX_DIMENSION {
        return Err(PhotoRejection::DimensionsTooLarge);
    }

    Ok(AcceptedPhoto {
        file_format: extension.to_uppercase(),
        width,
        height,
    })
}
