use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::profile_photo::upload_policy::PhotoRejection;

use super::outgoing::{ProfilePhotoFile, ProfilePhotoRecord};

/// Availability metadata for the active photo, including the URL the
/// frontend should render.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProfilePhotoInfo {
    pub available: bool,
    pub image_url: Option<String>,
    pub file_name: Option<String>,
    pub file_size: Option<String>,
    pub image_width: Option<i32>,
    pub image_height: Option<i32>,
    pub uploaded_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProfilePhotoError {
    #[error(transparent)]
    Rejected(#[from] PhotoRejection),

    #[error("Profile photo not found with id: {0}")]
    NotFound(Uuid),

    #[error("No active profile photo available")]
    NoActivePhoto,

    #[error("Repository error: {0}")]
    Repository(String),
}

#[async_trait]
pub trait ProfilePhotoUseCase: Send + Sync {
    /// Validates and decodes the upload, then stores it as the single
    /// active photo.
    async fn upload_photo(
        &self,
        original_file_name: String,
        content_type: String,
        bytes: Vec<u8>,
    ) -> Result<ProfilePhotoRecord, ProfilePhotoError>;

    async fn get_all_photos(&self) -> Result<Vec<ProfilePhotoRecord>, ProfilePhotoError>;

    async fn activate_photo(&self, id: Uuid) -> Result<ProfilePhotoRecord, ProfilePhotoError>;

    async fn delete_photo(&self, id: Uuid) -> Result<(), ProfilePhotoError>;

    async fn view_photo(&self, id: Uuid) -> Result<ProfilePhotoFile, ProfilePhotoError>;

    async fn view_active_photo(&self) -> Result<ProfilePhotoFile, ProfilePhotoError>;

    async fn photo_info(&self) -> Result<ProfilePhotoInfo, ProfilePhotoError>;
}
