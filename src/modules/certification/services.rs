use async_trait::async_trait;
use tracing::{info, warn};
use uuid::Uuid;

use crate::certification::ports::{
    incoming::{CertificationCommand, CertificationError, CertificationUseCase},
    outgoing::{
        CertificationData, CertificationRecord, CertificationRepository,
        CertificationRepositoryError,
    },
};

#[derive(Debug, Clone)]
pub struct CertificationService<R>
where
    R: CertificationRepository + Send + Sync,
{
    repository: R,
}

impl<R> CertificationService<R>
where
    R: CertificationRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    fn to_data(command: &CertificationCommand) -> CertificationData {
        CertificationData {
            title: command.title().to_string(),
            description: command.description().to_string(),
            month_year: command.month_year().to_string(),
            certification_link: command.certification_link().map(str::to_string),
        }
    }

    fn is_same(existing: &CertificationRecord, command: &CertificationCommand) -> bool {
        existing.title == command.title()
            && existing.description == command.description()
            && existing.month_year == command.month_year()
            && existing.certification_link.as_deref() == command.certification_link()
    }
}

fn map_repo_error(err: CertificationRepositoryError, id: Option<Uuid>) -> CertificationError {
    match err {
        CertificationRepositoryError::NotFound => {
            CertificationError::NotFound(id.unwrap_or_default())
        }
        CertificationRepositoryError::Database(msg) => CertificationError::Repository(msg),
    }
}

#[async_trait]
impl<R> CertificationUseCase for CertificationService<R>
where
    R: CertificationRepository + Send + Sync,
{
    async fn create_certification(
        &self,
        command: CertificationCommand,
    ) -> Result<CertificationRecord, CertificationError> {
        info!("Creating new certification: {}", command.title());

        self.repository
            .create(Self::to_data(&command))
            .await
            .map_err(|e| map_repo_error(e, None))
    }

    async fn update_certification(
        &self,
        id: Uuid,
        command: CertificationCommand,
    ) -> Result<CertificationRecord, CertificationError> {
        info!("Updating certification with id: {}", id);

        let existing = self
            .repository
            .find_by_id(id)
            .await
            .map_err(|e| map_repo_error(e, Some(id)))?
            .ok_or(CertificationError::NotFound(id))?;

        if Self::is_same(&existing, &command) {
            warn!("No change detected for certification update id: {}", id);
            return Err(CertificationError::NoChange);
        }

        self.repository
            .update(id, Self::to_data(&command))
            .await
            .map_err(|e| map_repo_error(e, Some(id)))
    }

    async fn delete_certification(&self, id: Uuid) -> Result<(), CertificationError> {
        info!("Deleting certification with id: {}", id);

        self.repository
            .delete(id)
            .await
            .map_err(|e| map_repo_error(e, Some(id)))
    }

    async fn get_all_certifications(
        &self,
    ) -> Result<Vec<CertificationRecord>, CertificationError> {
        let certifications = self
            .repository
            .find_all()
            .await
            .map_err(|e| map_repo_error(e, None))?;

        if certifications.is_empty() {
            return Err(CertificationError::NoneFound);
        }

        Ok(certifications)
    }
}
