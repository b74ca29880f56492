use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct ProfilePhotoData {
    pub file_name: String,
    pub original_file_name: String,
    pub file_format: String,
    pub file_size: i64,
    pub content_type: String,
    pub image_data: Vec<u8>,
    pub image_width: i32,
    pub image_height: i32,
    pub uploaded_date: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ProfilePhotoRecord {
    pub id: Uuid,
    pub file_name: String,
    pub original_file_name: String,
    pub file_format: String,
    pub file_size: i64,
    pub content_type: String,
    pub image_width: i32,
    pub image_height: i32,
    pub uploaded_date: DateTime<Utc>,
    pub is_active: bool,
}

/// Full row including the payload, for the view endpoints.
#[derive(Debug, Clone)]
pub struct ProfilePhotoFile {
    pub file_name: String,
    pub content_type: String,
    pub image_data: Vec<u8>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProfilePhotoRepositoryError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Profile photo not found")]
    NotFound,
}

#[async_trait]
pub trait ProfilePhotoRepository: Send + Sync {
    /// Deactivate every stored photo and insert the new one as active,
    /// inside one transaction.
    async fn insert_active(
        &self,
        data: ProfilePhotoData,
    ) -> Result<ProfilePhotoRecord, ProfilePhotoRepositoryError>;

    /// Deactivate every stored photo and mark the target active, inside
    /// one transaction.
    async fn activate(&self, id: Uuid)
        -> Result<ProfilePhotoRecord, ProfilePhotoRepositoryError>;

    async fn delete(&self, id: Uuid) -> Result<(), ProfilePhotoRepositoryError>;

    /// All metadata rows, newest upload first.
    async fn find_all_meta(&self)
        -> Result<Vec<ProfilePhotoRecord>, ProfilePhotoRepositoryError>;

    async fn find_active_meta(
        &self,
    ) -> Result<Option<ProfilePhotoRecord>, ProfilePhotoRepositoryError>;

    async fn find_active_file(
        &self,
    ) -> Result<Option<ProfilePhotoFile>, ProfilePhotoRepositoryError>;

    async fn find_file(
        &self,
        id: Uuid,
    ) -> Result<Option<ProfilePhotoFile>, ProfilePhotoRepositoryError>;
}
