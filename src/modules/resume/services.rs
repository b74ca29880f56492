use async_trait::async_trait;
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::resume::ports::{
    incoming::{ResumeDownloadInfo, ResumeError, ResumeUseCase},
    outgoing::{ResumeData, ResumeFile, ResumeRecord, ResumeRepository, ResumeRepositoryError},
};
use crate::resume::upload_policy;
use crate::shared::files::{format_file_size, stored_file_name};

#[derive(Debug, Clone)]
pub struct ResumeService<R>
where
    R: ResumeRepository + Send + Sync,
{
    repository: R,
}

impl<R> ResumeService<R>
where
    R: ResumeRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

fn map_repo_error(err: ResumeRepositoryError, id: Option<Uuid>) -> ResumeError {
    match err {
        ResumeRepositoryError::NotFound => ResumeError::NotFound(id.unwrap_or_default()),
        ResumeRepositoryError::Database(msg) => ResumeError::Repository(msg),
    }
}

#[async_trait]
impl<R> ResumeUseCase for ResumeService<R>
where
    R: ResumeRepository + Send + Sync,
{
    async fn upload_resume(
        &self,
        original_file_name: String,
        content_type: String,
        bytes: Vec<u8>,
    ) -> Result<ResumeRecord, ResumeError> {
        let file_format =
            upload_policy::validate(&original_file_name, &content_type, bytes.len()).map_err(
                |rejection| {
                    warn!(
                        "Rejected resume upload '{}': {}",
                        original_file_name, rejection
                    );
                    rejection
                },
            )?;

        let data = ResumeData {
            file_name: stored_file_name("", &original_file_name),
            original_file_name,
            file_format,
            file_size: bytes.len() as i64,
            content_type,
            file_data: bytes,
            uploaded_date: Utc::now(),
        };

        info!("Storing new active resume: {}", data.file_name);

        self.repository
            .insert_active(data)
            .await
            .map_err(|e| map_repo_error(e, None))
    }

    async fn get_all_resumes(&self) -> Result<Vec<ResumeRecord>, ResumeError> {
        self.repository
            .find_all_meta()
            .await
            .map_err(|e| map_repo_error(e, None))
    }

    async fn activate_resume(&self, id: Uuid) -> Result<ResumeRecord, ResumeError> {
        info!("Activating resume with id: {}", id);

        self.repository
            .activate(id)
            .await
            .map_err(|e| map_repo_error(e, Some(id)))
    }

    async fn delete_resume(&self, id: Uuid) -> Result<(), ResumeError> {
        info!("Deleting resume with id: {}", id);

        self.repository
            .delete(id)
            .await
            .map_err(|e| map_repo_error(e, Some(id)))
    }

    async fn download_active(&self) -> Result<ResumeFile, ResumeError> {
        self.repository
            .find_active_file()
            .await
            .map_err(|e| map_repo_error(e, None))?
            .ok_or(ResumeError::NoActiveResume)
    }

    async fn preview_resume(&self, id: Uuid) -> Result<ResumeFile, ResumeError> {
        self.repository
            .find_file(id)
            .await
            .map_err(|e| map_repo_error(e, Some(id)))?
            .ok_or(ResumeError::NotFound(id))
    }

    async fn download_info(&self) -> Result<ResumeDownloadInfo, ResumeError> {
        let active = self
            .repository
            .find_active_meta()
            .await
            .map_err(|e| map_repo_error(e, None))?;

        Ok(match active {
            Some(meta) => ResumeDownloadInfo {
                available: true,
                file_name: Some(meta.original_file_name),
                file_format: Some(meta.file_format),
                file_size: Some(format_file_size(meta.file_size)),
                uploaded_date: Some(meta.uploaded_date),
            },
            None => ResumeDownloadInfo {
                available: false,
                file_name: None,
                file_format: None,
                file_size: None,
                uploaded_date: None,
            },
        })
    }
}
