use async_trait::async_trait;
use uuid::Uuid;

use super::outgoing::CertificationRecord;

#[derive(Debug, Clone)]
pub struct CertificationCommand {
    title: String,
    description: String,
    month_year: String,
    certification_link: Option<String>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CertificationCommandError {
    #[error("Required fields are missing or blank")]
    MissingFields(Vec<String>),
}

impl CertificationCommand {
    pub fn new(
        title: String,
        description: String,
        month_year: String,
        certification_link: Option<String>,
    ) -> Result<Self, CertificationCommandError> {
        let mut missing = Vec::new();
        if title.trim().is_empty() {
            missing.push("title".to_string());
        }
        if description.trim().is_empty() {
            missing.push("description".to_string());
        }
        if month_year.trim().is_empty() {
            missing.push("monthYear".to_string());
        }
        if !missing.is_empty() {
            return Err(CertificationCommandError::MissingFields(missing));
        }

        Ok(Self {
            title,
            description,
            month_year,
            certification_link,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn month_year(&self) -> &str {
        &self.month_year
    }

    pub fn certification_link(&self) -> Option<&str> {
        self.certification_link.as_deref()
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CertificationError {
    #[error("Certification not found with id: {0}")]
    NotFound(Uuid),

    #[error("No changes detected in the request")]
    NoChange,

    #[error("No certifications available to fetch")]
    NoneFound,

    #[error("Repository error: {0}")]
    Repository(String),
}

#[async_trait]
pub trait CertificationUseCase: Send + Sync {
    async fn create_certification(
        &self,
        command: CertificationCommand,
    ) -> Result<CertificationRecord, CertificationError>;

    async fn update_certification(
        &self,
        id: Uuid,
        command: CertificationCommand,
    ) -> Result<CertificationRecord, CertificationError>;

    async fn delete_certification(&self, id: Uuid) -> Result<(), CertificationError>;

    async fn get_all_certifications(
        &self,
    ) -> Result<Vec<CertificationRecord>, CertificationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_month_year_is_reported_by_request_field_name() {
        let result = CertificationCommand::new(
            "AWS SAA".into(),
            "Associate architect".into(),
            "  ".into(),
            None,
        );

        match result {
            Err(CertificationCommandError::MissingFields(fields)) => {
                assert_eq!(fields, vec!["monthYear".to_string()]);
            }
            other => panic!("expected missing fields, got {other:?}"),
        }
    }
}
