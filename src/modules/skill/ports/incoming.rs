use async_trait::async_trait;
use uuid::Uuid;

use super::outgoing::SkillRecord;

/// Fully validated input for creating or replacing a skill.
#[derive(Debug, Clone)]
pub struct SkillCommand {
    name: String,
    category: Option<String>,
    proficiency: i32,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum SkillCommandError {
    #[error("Required fields are missing or blank")]
    MissingFields(Vec<String>),

    #[error("Proficiency must be between 0 and 5")]
    ProficiencyOutOfRange,
}

impl SkillCommand {
    /// Absent proficiency defaults to 0, matching the public contract.
    pub fn new(
        name: String,
        category: Option<String>,
        proficiency: Option<i32>,
    ) -> Result<Self, SkillCommandError> {
        if name.trim().is_empty() {
            return Err(SkillCommandError::MissingFields(vec!["name".to_string()]));
        }

        let proficiency = proficiency.unwrap_or(0);
        if !(0..=5).contains(&proficiency) {
            return Err(SkillCommandError::ProficiencyOutOfRange);
        }

        Ok(Self {
            name,
            category,
            proficiency,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn proficiency(&self) -> i32 {
        self.proficiency
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum SkillError {
    #[error("Skill with name already exists: {0}")]
    DuplicateName(String),

    #[error("Skill not found with id: {0}")]
    NotFound(Uuid),

    #[error("No changes detected in the request")]
    NoChange,

    #[error("No skills available to fetch")]
    NoneFound,

    #[error("Repository error: {0}")]
    Repository(String),
}

#[async_trait]
pub trait SkillUseCase: Send + Sync {
    async fn create_skill(&self, command: SkillCommand) -> Result<SkillRecord, SkillError>;

    async fn update_skill(
        &self,
        id: Uuid,
        command: SkillCommand,
    ) -> Result<SkillRecord, SkillError>;

    async fn delete_skill(&self, id: Uuid) -> Result<(), SkillError>;

    async fn get_all_skills(&self) -> Result<Vec<SkillRecord>, SkillError>;
}
