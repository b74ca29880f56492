use async_trait::async_trait;
use tracing::{info, warn};
use uuid::Uuid;

use crate::award::ports::{
    incoming::{AwardCommand, AwardError, AwardUseCase},
    outgoing::{AwardData, AwardRecord, AwardRepository, AwardRepositoryError},
};

#[derive(Debug, Clone)]
pub struct AwardService<R>
where
    R: AwardRepository + Send + Sync,
{
    repository: R,
}

impl<R> AwardService<R>
where
    R: AwardRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    fn to_data(command: &AwardCommand) -> AwardData {
        AwardData {
            award_name: command.award_name().to_string(),
            description: command.description().to_string(),
            award_company_name: command.award_company_name().to_string(),
            award_link: command.award_link().map(str::to_string),
            award_year: command.award_year().map(str::to_string),
        }
    }

    fn is_same(existing: &AwardRecord, command: &AwardCommand) -> bool {
        existing.award_name.eq_ignore_ascii_case(command.award_name())
            && existing.description == command.description()
            && existing.award_company_name == command.award_company_name()
            && existing.award_link.as_deref() == command.award_link()
            && existing.award_year.as_deref() == command.award_year()
    }
}

fn map_repo_error(err: AwardRepositoryError, id: Option<Uuid>) -> AwardError {
    match err {
        AwardRepositoryError::NotFound => AwardError::NotFound(id.unwrap_or_default()),
        AwardRepositoryError::Database(msg) => AwardError::Repository(msg),
    }
}

#[async_trait]
impl<R> AwardUseCase for AwardService<R>
where
    R: AwardRepository + Send + Sync,
{
    async fn create_award(&self, command: AwardCommand) -> Result<AwardRecord, AwardError> {
        info!("Creating new award: {}", command.award_name());

        self.repository
            .create(Self::to_data(&command))
            .await
            .map_err(|e| map_repo_error(e, None))
    }

    async fn update_award(
        &self,
        id: Uuid,
        command: AwardCommand,
    ) -> Result<AwardRecord, AwardError> {
        info!("Updating award with id: {}", id);

        let existing = self
            .repository
            .find_by_id(id)
            .await
            .map_err(|e| map_repo_error(e, Some(id)))?
            .ok_or(AwardError::NotFound(id))?;

        if Self::is_same(&existing, &command) {
            warn!("No change detected for award update id: {}", id);
            return Err(AwardError::NoChange);
        }

        self.repository
            .update(id, Self::to_data(&command))
            .await
            .map_err(|e| map_repo_error(e, Some(id)))
    }

    async fn delete_award(&self, id: Uuid) -> Result<(), AwardError> {
        info!("Deleting award with id: {}", id);

        self.repository
            .delete(id)
            .await
            .map_err(|e| map_repo_error(e, Some(id)))
    }

    async fn get_all_awards(&self) -> Result<Vec<AwardRecord>, AwardError> {
        let awards = self
            .repository
            .find_all()
            .await
            .map_err(|e| map_repo_error(e, None))?;

        if awards.is_empty() {
            return Err(AwardError::NoneFound);
        }

        Ok(awards)
    }
}
