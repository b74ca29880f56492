use async_trait::async_trait;
use tracing::{info, warn};
use uuid::Uuid;

use crate::education::ports::{
    incoming::{EducationCommand, EducationError, EducationUseCase},
    outgoing::{EducationData, EducationRecord, EducationRepository, EducationRepositoryError},
};

#[derive(Debug, Clone)]
pub struct EducationService<R>
where
    R: EducationRepository + Send + Sync,
{
    repository: R,
}

impl<R> EducationService<R>
where
    R: EducationRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    fn to_data(command: &EducationCommand) -> EducationData {
        EducationData {
            degree: command.degree().to_string(),
            field: command.field().to_string(),
            university: command.university().to_string(),
            institute: command.institute().to_string(),
            location: command.location().map(str::to_string),
            start_date: command.start_date().to_string(),
            end_date: command.end_date().map(str::to_string),
            currently_studying: command.currently_studying(),
            grade: command.grade().to_string(),
            education_type: command.education_type().to_string(),
            description: command.description().map(str::to_string),
        }
    }

    fn is_same(existing: &EducationRecord, command: &EducationCommand) -> bool {
        existing.degree == command.degree()
            && existing.field == command.field()
            && existing.university == command.university()
            && existing.institute == command.institute()
            && existing.location.as_deref() == command.location()
            && existing.start_date == command.start_date()
            && existing.end_date.as_deref() == command.end_date()
            && existing.currently_studying == command.currently_studying()
            && existing.grade == command.grade()
            && existing.education_type == command.education_type()
            && existing.description.as_deref() == command.description()
    }
}

fn map_repo_error(err: EducationRepositoryError, id: Option<Uuid>) -> EducationError {
    match err {
        EducationRepositoryError::NotFound => EducationError::NotFound(id.unwrap_or_default()),
        EducationRepositoryError::DuplicatePeriod => EducationError::DuplicatePeriod,
        EducationRepositoryError::Database(msg) => EducationError::Repository(msg),
    }
}

#[async_trait]
impl<R> EducationUseCase for EducationService<R>
where
    R: EducationRepository + Send + Sync,
{
    async fn create_education(
        &self,
        command: EducationCommand,
    ) -> Result<EducationRecord, EducationError> {
        info!(
            "Creating new education: {} at {}",
            command.degree(),
            command.university()
        );

        self.repository
            .create(Self::to_data(&command))
            .await
            .map_err(|e| map_repo_error(e, None))
    }

    async fn update_education(
        &self,
        id: Uuid,
        command: EducationCommand,
    ) -> Result<EducationRecord, EducationError> {
        info!("Updating education with id: {}", id);

        let existing = self
            .repository
            .find_by_id(id)
            .await
            .map_err(|e| map_repo_error(e, Some(id)))?
            .ok_or(EducationError::NotFound(id))?;

        if Self::is_same(&existing, &command) {
            warn!("No change detected for education update id: {}", id);
            return Err(EducationError::NoChange);
        }

        self.repository
            .update(id, Self::to_data(&command))
            .await
            .map_err(|e| map_repo_error(e, Some(id)))
    }

    async fn delete_education(&self, id: Uuid) -> Result<(), EducationError> {
        info!("Deleting education with id: {}", id);

        self.repository
            .delete(id)
            .await
            .map_err(|e| map_repo_error(e, Some(id)))
    }

    async fn get_all_educations(&self) -> Result<Vec<EducationRecord>, EducationError> {
        let educations = self
            .repository
            .find_all()
            .await
            .map_err(|e| map_repo_error(e, None))?;

        if educations.is_empty() {
            return Err(EducationError::NoneFound);
        }

        Ok(educations)
    }
}
