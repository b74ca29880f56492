use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct ExperienceData {
    pub company_name: String,
    pub role: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub current: bool,
    pub description: Option<String>,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ExperienceRecord {
    pub id: Uuid,
    pub company_name: String,
    pub role: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub current: bool,
    pub description: Option<String>,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ExperienceRepositoryError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Experience not found")]
    NotFound,

    #[error("Overlapping experience period")]
    Overlap,
}

#[async_trait]
pub trait ExperienceRepository: Send + Sync {
    /// Overlap scan and insert share one transaction.
    async fn create(
        &self,
        data: ExperienceData,
    ) -> Result<ExperienceRecord, ExperienceRepositoryError>;

    /// Same overlap scan as `create`, excluding the updated row.
    async fn update(
        &self,
        id: Uuid,
        data: ExperienceData,
    ) -> Result<ExperienceRecord, ExperienceRepositoryError>;

    async fn delete(&self, id: Uuid) -> Result<(), ExperienceRepositoryError>;

    async fn find_by_id(
        &self,
        id: Uuid,
    ) -> Result<Option<ExperienceRecord>, ExperienceRepositoryError>;

    async fn find_all(&self) -> Result<Vec<ExperienceRecord>, ExperienceRepositoryError>;
}
