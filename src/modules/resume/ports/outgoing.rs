use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct ResumeData {
    pub file_name: String,
    pub original_file_name: String,
    pub file_format: String,
    pub file_size: i64,
    pub content_type: String,
    pub file_data: Vec<u8>,
    pub uploaded_date: DateTime<Utc>,
}

/// Metadata view; the payload never travels with list responses.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ResumeRecord {
    pub id: Uuid,
    pub file_name: String,
    pub original_file_name: String,
    pub file_format: String,
    pub file_size: i64,
    pub content_type: String,
    pub uploaded_date: DateTime<Utc>,
    pub is_active: bool,
}

/// Full row including the payload, for download and preview.
#[derive(Debug, Clone)]
pub struct ResumeFile {
    pub file_name: String,
    pub original_file_name: String,
    pub content_type: String,
    pub file_data: Vec<u8>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ResumeRepositoryError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Resume not found")]
    NotFound,
}

#[async_trait]
pub trait ResumeRepository: Send + Sync {
    /// Deactivate every stored resume and insert the new one as active,
    /// inside one transaction.
    async fn insert_active(&self, data: ResumeData) -> Result<ResumeRecord, ResumeRepositoryError>;

    /// Deactivate every stored resume and mark the target active, inside
    /// one transaction.
    async fn activate(&self, id: Uuid) -> Result<ResumeRecord, ResumeRepositoryError>;

    async fn delete(&self, id: Uuid) -> Result<(), ResumeRepositoryError>;

    /// All metadata rows, newest upload first.
    async fn find_all_meta(&self) -> Result<Vec<ResumeRecord>, ResumeRepositoryError>;

    async fn find_active_meta(&self) -> Result<Option<ResumeRecord>, ResumeRepositoryError>;

    async fn find_active_file(&self) -> Result<Option<ResumeFile>, ResumeRepositoryError>;

    async fn find_file(&self, id: Uuid) -> Result<Option<ResumeFile>, ResumeRepositoryError>;
}
