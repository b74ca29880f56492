use async_trait::async_trait;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct AwardData {
    pub award_name: String,
    pub description: String,
    pub award_company_name: String,
    pub award_link: Option<String>,
    pub award_year: Option<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AwardRecord {
    pub id: Uuid,
    pub award_name: String,
    pub description: String,
    pub award_company_name: String,
    pub award_link: Option<String>,
    pub award_year: Option<String>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum AwardRepositoryError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Award not found")]
    NotFound,
}

#[async_trait]
pub trait AwardRepository: Send + Sync {
    async fn create(&self, data: AwardData) -> Result<AwardRecord, AwardRepositoryError>;

    async fn update(
        &self,
        id: Uuid,
        data: AwardData,
    ) -> Result<AwardRecord, AwardRepositoryError>;

    async fn delete(&self, id: Uuid) -> Result<(), AwardRepositoryError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<AwardRecord>, AwardRepositoryError>;

    async fn find_all(&self) -> Result<Vec<AwardRecord>, AwardRepositoryError>;
}
