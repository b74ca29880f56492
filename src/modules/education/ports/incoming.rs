use async_trait::async_trait;
use uuid::Uuid;

use super::outgoing::EducationRecord;

/// Education periods are plain strings compared lexicographically, so
/// callers must send zero-padded sortable dates (e.g. `2021-09`).
#[derive(Debug, Clone)]
pub struct EducationCommand {
    degree: String,
    field: String,
    university: String,
    institute: String,
    location: Option<String>,
    start_date: String,
    end_date: Option<String>,
    currently_studying: bool,
    grade: String,
    education_type: String,
    description: Option<String>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum EducationCommandError {
    #[error("Required fields are missing or blank")]
    MissingFields(Vec<String>),

    #[error("End date must not be set while currently studying")]
    EndDateWhileStudying,

    #[error("End date is required when not currently studying")]
    EndDateRequired,

    #[error("End date must not be before start date")]
    EndBeforeStart,
}

impl EducationCommand {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        degree: String,
        field: String,
        university: String,
        institute: String,
        location: Option<String>,
        start_date: String,
        end_date: Option<String>,
        currently_studying: bool,
        grade: String,
        education_type: String,
        description: Option<String>,
    ) -> Result<Self, EducationCommandError> {
        let mut missing = Vec::new();
        if degree.trim().is_empty() {
            missing.push("degree".to_string());
        }
        if field.trim().is_empty() {
            missing.push("field".to_string());
        }
        if university.trim().is_empty() {
            missing.push("university".to_string());
        }
        if institute.trim().is_empty() {
            missing.push("institute".to_string());
        }
        if start_date.trim().is_empty() {
            missing.push("startDate".to_string());
        }
        if grade.trim().is_empty() {
            missing.push("grade".to_string());
        }
        if education_type.trim().is_empty() {
            missing.push("educationType".to_string());
        }
        if !missing.is_empty() {
            return Err(EducationCommandError::MissingFields(missing));
        }

        let end_date = end_date.filter(|e| !e.trim().is_empty());

        if currently_studying {
            if end_date.is_some() {
                return Err(EducationCommandError::EndDateWhileStudying);
            }
        } else {
            match &end_date {
                None => return Err(EducationCommandError::EndDateRequired),
                Some(end) if end.as_str() < start_date.as_str() => {
                    return Err(EducationCommandError::EndBeforeStart);
                }
                Some(_) => {}
            }
        }

        Ok(Self {
            degree,
            field,
            university,
            institute,
            location,
            start_date,
            end_date,
            currently_studying,
            grade,
            education_type,
            description,
        })
    }

    pub fn degree(&self) -> &str {
        &self.degree
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn university(&self) -> &str {
        &self.university
    }

    pub fn institute(&self) -> &str {
        &self.institute
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    pub fn start_date(&self) -> &str {
        &self.start_date
    }

    pub fn end_date(&self) -> Option<&str> {
        self.end_date.as_deref()
    }

    pub fn currently_studying(&self) -> bool {
        self.currently_studying
    }

    pub fn grade(&self) -> &str {
        &self.grade
    }

    pub fn education_type(&self) -> &str {
        &self.education_type
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum EducationError {
    #[error("Education not found with id: {0}")]
    NotFound(Uuid),

    #[error("An education with the same start and end dates already exists")]
    DuplicatePeriod,

    #[error("No changes detected in the request")]
    NoChange,

    #[error("No educations available to fetch")]
    NoneFound,

    #[error("Repository error: {0}")]
    Repository(String),
}

#[async_trait]
pub trait EducationUseCase: Send + Sync {
    async fn create_education(
        &self,
        command: EducationCommand,
    ) -> Result<EducationRecord, EducationError>;

    async fn update_education(
        &self,
        id: Uuid,
        command: EducationCommand,
    ) -> Result<EducationRecord, EducationError>;

    async fn delete_education(&self, id: Uuid) -> Result<(), EducationError>;

    async fn get_all_educations(&self) -> Result<Vec<EducationRecord>, EducationError>;
}
