use async_trait::async_trait;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct CertificationData {
    pub title: String,
    pub description: String,
    pub month_year: String,
    pub certification_link: Option<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CertificationRecord {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub month_year: String,
    pub certification_link: Option<String>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CertificationRepositoryError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Certification not found")]
    NotFound,
}

#[async_trait]
pub trait CertificationRepository: Send + Sync {
    async fn create(
        &self,
        data: CertificationData,
    ) -> Result<CertificationRecord, CertificationRepositoryError>;

    async fn update(
        &self,
        id: Uuid,
        data: CertificationData,
    ) -> Result<CertificationRecord, CertificationRepositoryError>;

    async fn delete(&self, id: Uuid) -> Result<(), CertificationRepositoryError>;

    async fn find_by_id(
        &self,
        id: Uuid,
    ) -> Result<Option<CertificationRecord>, CertificationRepositoryError>;

    async fn find_all(&self) -> Result<Vec<CertificationRecord>, CertificationRepositoryError>;
}
