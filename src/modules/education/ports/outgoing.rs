use async_trait::async_trait;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct EducationData {
    pub degree: String,
    pub field: String,
    pub university: String,
    pub institute: String,
    pub location: Option<String>,
    pub start_date: String,
    pub end_date: Option<String>,
    pub currently_studying: bool,
    pub grade: String,
    pub education_type: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct EducationRecord {
    pub id: Uuid,
    pub degree: String,
    pub field: String,
    pub university: String,
    pub institute: String,
    pub location: Option<String>,
    pub start_date: String,
    pub end_date: Option<String>,
    pub currently_studying: bool,
    pub grade: String,
    pub education_type: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum EducationRepositoryError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Education not found")]
    NotFound,

    #[error("Duplicate education period")]
    DuplicatePeriod,
}

#[async_trait]
pub trait EducationRepository: Send + Sync {
    /// Insert after checking no other row shares the same start/end pair,
    /// both inside one transaction.
    async fn create(&self, data: EducationData) -> Result<EducationRecord, EducationRepositoryError>;

    /// Same duplicate-pair check as `create`, excluding the updated row.
    async fn update(
        &self,
        id: Uuid,
        data: EducationData,
    ) -> Result<EducationRecord, EducationRepositoryError>;

    async fn delete(&self, id: Uuid) -> Result<(), EducationRepositoryError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<EducationRecord>, EducationRepositoryError>;

    async fn find_all(&self) -> Result<Vec<EducationRecord>, EducationRepositoryError>;
}
