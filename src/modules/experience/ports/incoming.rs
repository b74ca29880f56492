use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use crate::experience::domain::{self, DateRuleViolation};

use super::outgoing::ExperienceRecord;

#[derive(Debug, Clone)]
pub struct ExperienceCommand {
    company_name: String,
    role: String,
    start_date: NaiveDate,
    end_date: Option<NaiveDate>,
    current: bool,
    description: Option<String>,
    skills: Vec<String>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ExperienceCommandError {
    #[error("Required fields are missing or blank")]
    MissingFields(Vec<String>),

    #[error(transparent)]
    InvalidDates(#[from] DateRuleViolation),
}

impl ExperienceCommand {
    pub fn new(
        company_name: String,
        role: String,
        start_date: NaiveDate,
        end_date: Option<NaiveDate>,
        current: bool,
        description: Option<String>,
        skills: Vec<String>,
    ) -> Result<Self, ExperienceCommandError> {
        Self::with_today(
            company_name,
            role,
            start_date,
            end_date,
            current,
            description,
            skills,
            Utc::now().date_naive(),
        )
    }

    #[allow(clippy::too_many_arguments)]
    pub(crate) fn with_today(
        company_name: String,
        role: String,
        start_date: NaiveDate,
        end_date: Option<NaiveDate>,
        current: bool,
        description: Option<String>,
        skills: Vec<String>,
        today: NaiveDate,
    ) -> Result<Self, ExperienceCommandError> {
        let mut missing = Vec::new();
        if company_name.trim().is_empty() {
            missing.push("companyName".to_string());
        }
        if role.trim().is_empty() {
            missing.push("role".to_string());
        }
        if !missing.is_empty() {
            return Err(ExperienceCommandError::MissingFields(missing));
        }

        domain::validate_dates(start_date, end_date, current, today)?;

        Ok(Self {
            company_name,
            role,
            start_date,
            end_date,
            current,
            description,
            skills,
        })
    }

    pub fn company_name(&self) -> &str {
        &self.company_name
    }

    pub fn role(&self) -> &str {
        &self.role
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end_date(&self) -> Option<NaiveDate> {
        self.end_date
    }

    pub fn current(&self) -> bool {
        self.current
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn skills(&self) -> &[String] {
        &self.skills
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ExperienceError {
    #[error("Experience not found with id: {0}")]
    NotFound(Uuid),

    #[error("Experience period overlaps an existing experience")]
    Overlap,

    #[error("No changes detected in the request")]
    NoChange,

    #[error("No experiences available to fetch")]
    NoneFound,

    #[error("Repository error: {0}")]
    Repository(String),
}

#[async_trait]
pub trait ExperienceUseCase: Send + Sync {
    async fn create_experience(
        &self,
        command: ExperienceCommand,
    ) -> Result<ExperienceRecord, ExperienceError>;

    async fn update_experience(
        &self,
        id: Uuid,
        command: ExperienceCommand,
    ) -> Result<ExperienceRecord, ExperienceError>;

    async fn delete_experience(&self, id: Uuid) -> Result<(), ExperienceError>;

    async fn get_all_experiences(&self) -> Result<Vec<ExperienceRecord>, ExperienceError>;
}
