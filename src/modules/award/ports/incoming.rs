use async_trait::async_trait;
use uuid::Uuid;

use super::outgoing::AwardRecord;

#[derive(Debug, Clone)]
pub struct AwardCommand {
    award_name: String,
    description: String,
    award_company_name: String,
    award_link: Option<String>,
    award_year: Option<String>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum AwardCommandError {
    #[error("Required fields are missing or blank")]
    MissingFields(Vec<String>),
}

impl AwardCommand {
    pub fn new(
        award_name: String,
        description: String,
        award_company_name: String,
        award_link: Option<String>,
        award_year: Option<String>,
    ) -> Result<Self, AwardCommandError> {
        let mut missing = Vec::new();
        if award_name.trim().is_empty() {
            missing.push("awardName".to_string());
        }
        if description.trim().is_empty() {
            missing.push("description".to_string());
        }
        if award_company_name.trim().is_empty() {
            missing.push("awardCompanyName".to_string());
        }
        if !missing.is_empty() {
            return Err(AwardCommandError::MissingFields(missing));
        }

        Ok(Self {
            award_name,
            description,
            award_company_name,
            award_link,
            award_year,
        })
    }

    pub fn award_name(&self) -> &str {
        &self.award_name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn award_company_name(&self) -> &str {
        &self.award_company_name
    }

    pub fn award_link(&self) -> Option<&str> {
        self.award_link.as_deref()
    }

    pub fn award_year(&self) -> Option<&str> {
        self.award_year.as_deref()
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum AwardError {
    #[error("Award not found with id: {0}")]
    NotFound(Uuid),

    #[error("No changes detected in the request")]
    NoChange,

    #[error("No awards available to fetch")]
    NoneFound,

    #[error("Repository error: {0}")]
    Repository(String),
}

#[async_trait]
pub trait AwardUseCase: Send + Sync {
    async fn create_award(&self, command: AwardCommand) -> Result<AwardRecord, AwardError>;

    async fn update_award(
        &self,
        id: Uuid,
        command: AwardCommand,
    ) -> Result<AwardRecord, AwardError>;

    async fn delete_award(&self, id: Uuid) -> Result<(), AwardError>;

    async fn get_all_awards(&self) -> Result<Vec<AwardRecord>, AwardError>;
}
