use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::resume::upload_policy::ResumeRejection;

use super::outgoing::{ResumeFile, ResumeRecord};

/// Availability metadata for the active resume, without the payload.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResumeDownloadInfo {
    pub available: bool,
    pub file_name: Option<String>,
    pub file_format: Option<String>,
    pub file_size: Option<String>,
    pub uploaded_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ResumeError {
    #[error(transparent)]
    Rejected(#[from] ResumeRejection),

    #[error("Resume not found with id: {0}")]
    NotFound(Uuid),

    #[error("No active resume available")]
    NoActiveResume,

    #[error("Repository error: {0}")]
    Repository(String),
}

#[async_trait]
pub trait ResumeUseCase: Send + Sync {
    /// Validates the upload, then stores it as the single active resume.
    async fn upload_resume(
        &self,
        original_file_name: String,
        content_type: String,
        bytes: Vec<u8>,
    ) -> Result<ResumeRecord, ResumeError>;

    async fn get_all_resumes(&self) -> Result<Vec<ResumeRecord>, ResumeError>;

    async fn activate_resume(&self, id: Uuid) -> Result<ResumeRecord, ResumeError>;

    async fn delete_resume(&self, id: Uuid) -> Result<(), ResumeError>;

    async fn download_active(&self) -> Result<ResumeFile, ResumeError>;

    async fn preview_resume(&self, id: Uuid) -> Result<ResumeFile, ResumeError>;

    async fn download_info(&self) -> Result<ResumeDownloadInfo, ResumeError>;
}
