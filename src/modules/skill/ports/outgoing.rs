use async_trait::async_trait;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct SkillData {
    pub name: String,
    pub category: Option<String>,
    pub proficiency: i32,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SkillRecord {
    pub id: Uuid,
    pub name: String,
    pub category: Option<String>,
    pub proficiency: i32,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum SkillRepositoryError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Skill not found")]
    NotFound,

    #[error("Skill name already taken")]
    DuplicateName,
}

#[async_trait]
pub trait SkillRepository: Send + Sync {
    /// Insert after a case-insensitive name check, both inside one
    /// transaction.
    async fn create(&self, data: SkillData) -> Result<SkillRecord, SkillRepositoryError>;

    /// Replace all fields; the duplicate check excludes the updated row.
    async fn update(
        &self,
        id: Uuid,
        data: SkillData,
    ) -> Result<SkillRecord, SkillRepositoryError>;

    async fn delete(&self, id: Uuid) -> Result<(), SkillRepositoryError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<SkillRecord>, SkillRepositoryError>;

    async fn find_all(&self) -> Result<Vec<SkillRecord>, SkillRepositoryError>;
}
