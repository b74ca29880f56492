use async_trait::async_trait;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct ProjectData {
    pub title: String,
    pub description: String,
    pub tech_stack: Option<String>,
    pub github_link: Option<String>,
    pub live_demo_link: Option<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ProjectRecord {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub tech_stack: Option<String>,
    pub github_link: Option<String>,
    pub live_demo_link: Option<String>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProjectRepositoryError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Project not found")]
    NotFound,

    #[error("Duplicate project title")]
    DuplicateTitle,
}

#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Insert after a case-insensitive title scan, both inside one
    /// transaction.
    async fn create(&self, data: ProjectData) -> Result<ProjectRecord, ProjectRepositoryError>;

    /// Same title scan as `create`, excluding the updated row.
    async fn update(
        &self,
        id: Uuid,
        data: ProjectData,
    ) -> Result<ProjectRecord, ProjectRepositoryError>;

    async fn delete(&self, id: Uuid) -> Result<(), ProjectRepositoryError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<ProjectRecord>, ProjectRepositoryError>;

    async fn find_all(&self) -> Result<Vec<ProjectRecord>, ProjectRepositoryError>;
}
