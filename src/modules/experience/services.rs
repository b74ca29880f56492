use std::collections::HashSet;

use async_trait::async_trait;
use tracing::{info, warn};
use uuid::Uuid;

use crate::experience::ports::{
    incoming::{ExperienceCommand, ExperienceError, ExperienceUseCase},
    outgoing::{
        ExperienceData, ExperienceRecord, ExperienceRepository, ExperienceRepositoryError,
    },
};

#[derive(Debug, Clone)]
pub struct ExperienceService<R>
where
    R: ExperienceRepository + Send + Sync,
{
    repository: R,
}

impl<R> ExperienceService<R>
where
    R: ExperienceRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    fn to_data(command: &ExperienceCommand) -> ExperienceData {
        ExperienceData {
            company_name: command.company_name().to_string(),
            role: command.role().to_string(),
            start_date: command.start_date(),
            end_date: command.end_date(),
            current: command.current(),
            description: command.description().map(str::to_string),
            skills: command.skills().to_vec(),
        }
    }

    fn is_same(existing: &ExperienceRecord, command: &ExperienceCommand) -> bool {
        // Skills are a tag set: order and duplicates do not count as change.
        let existing_skills: HashSet<&str> =
            existing.skills.iter().map(String::as_str).collect();
        let candidate_skills: HashSet<&str> =
            command.skills().iter().map(String::as_str).collect();

        existing.company_name == command.company_name()
            && existing.role == command.role()
            && existing.start_date == command.start_date()
            && existing.end_date == command.end_date()
            && existing.current == command.current()
            && existing.description.as_deref() == command.description()
            && existing_skills == candidate_skills
    }
}

fn map_repo_error(err: ExperienceRepositoryError, id: Option<Uuid>) -> ExperienceError {
    match err {
        ExperienceRepositoryError::NotFound => ExperienceError::NotFound(id.unwrap_or_default()),
        ExperienceRepositoryError::Overlap => ExperienceError::Overlap,
        ExperienceRepositoryError::Database(msg) => ExperienceError::Repository(msg),
    }
}

#[async_trait]
impl<R> ExperienceUseCase for ExperienceService<R>
where
    R: ExperienceRepository + Send + Sync,
{
    async fn create_experience(
        &self,
        command: ExperienceCommand,
    ) -> Result<ExperienceRecord, ExperienceError> {
        info!(
            "Creating new experience: {} at {}",
            command.role(),
            command.company_name()
        );

        self.repository
            .create(Self::to_data(&command))
            .await
            .map_err(|e| map_repo_error(e, None))
    }

    async fn update_experience(
        &self,
        id: Uuid,
        command: ExperienceCommand,
    ) -> Result<ExperienceRecord, ExperienceError> {
        info!("Updating experience with id: {}", id);

        let existing = self
            .repository
            .find_by_id(id)
            .await
            .map_err(|e| map_repo_error(e, Some(id)))?
            .ok_or(ExperienceError::NotFound(id))?;

        if Self::is_same(&existing, &command) {
            warn!("No change detected for experience update id: {}", id);
            return Err(ExperienceError::NoChange);
        }

        self.repository
            .update(id, Self::to_data(&command))
            .await
            .map_err(|e| map_repo_error(e, Some(id)))
    }

    async fn delete_experience(&self, id: Uuid) -> Result<(), ExperienceError> {
        info!("Deleting experience with id: {}", id);

        self.repository
            .delete(id)
            .await
            .map_err(|e| map_repo_error(e, Some(id)))
    }

    async fn get_all_experiences(&self) -> Result<Vec<ExperienceRecord>, ExperienceError> {
        let experiences = self
            .repository
            .find_all()
            .await
            .map_err(|e| map_repo_error(e, None))?;

        if experiences.is_empty() {
            return Err(ExperienceError::NoneFound);
        }

        Ok(experiences)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::sync::Mutex;

    use crate::experience::domain;

    struct MockExperienceRepository {
        records: Mutex<Vec<ExperienceRecord>>,
        today: NaiveDate,
    }

    impl MockExperienceRepository {
        fn new(records: Vec<ExperienceRecord>, today: NaiveDate) -> Self {
            Self {
                records: Mutex::new(records),
                today,
            }
        }

        fn conflicts(&self, data: &ExperienceData, exclude: Option<Uuid>) -> bool {
            let candidate_end = domain::effective_end(data.end_date, data.current, self.today);
            self.records
                .lock()
                .unwrap()
                .iter()
                .filter(|r| Some(r.id) != exclude)
                .any(|r| {
                    let other_end = domain::effective_end(r.end_date, r.current, self.today);
                    domain::overlaps(data.start_date, candidate_end, r.start_date, other_end)
                })
        }
    }

    #[async_trait]
    impl ExperienceRepository for MockExperienceRepository {
        async fn create(
            &self,
            data: ExperienceData,
        ) -> Result<ExperienceRecord, ExperienceRepositoryError> {
            if self.conflicts(&data, None) {
                return Err(ExperienceRepositoryError::Overlap);
            }
            let record = to_record(Uuid::new_v4(), data);
            self.records.lock().unwrap().push(record.clone());
            Ok(record)
        }

        async fn update(
            &self,
            id: Uuid,
            data: ExperienceData,
        ) -> Result<ExperienceRecord, ExperienceRepositoryError> {
            if self.conflicts(&data, Some(id)) {
                return Err(ExperienceRepositoryError::Overlap);
            }
            let mut records = self.records.lock().unwrap();
            let slot = records
                .iter_mut()
                .find(|r| r.id == id)
                .ok_or(ExperienceRepositoryError::NotFound)?;
            *slot = to_record(id, data);
            Ok(slot.clone())
        }

        async fn delete(&self, id: Uuid) -> Result<(), ExperienceRepositoryError> {
            let mut records = self.records.lock().unwrap();
            let before = records.len();
            records.retain(|r| r.id != id);
            if records.len() == before {
                return Err(ExperienceRepositoryError::NotFound);
            }
            Ok(())
        }

        async fn find_by_id(
            &self,
            id: Uuid,
        ) -> Result<Option<ExperienceRecord>, ExperienceRepositoryError> {
            Ok(self
                .records
                .lock()
                .unwrap()
                .iter()
                .find(|r| r.id == id)
                .cloned())
        }

        async fn find_all(&self) -> Result<Vec<ExperienceRecord>, ExperienceRepositoryError> {
            Ok(self.records.lock().unwrap().clone())
        }
    }

    fn to_record(id: Uuid, data: ExperienceData) -> ExperienceRecord {
        ExperienceRecord {
            id,
            company_name: data.company_name,
            role: data.role,
            start_date: data.start_date,
            end_date: data.end_date,
            current: data.current,
            description: data.description,
            skills: data.skills,
        }
    }

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn today() -> NaiveDate {
        d(2025, 6, 15)
    }

    fn acme_record(id: Uuid, start: NaiveDate, end: NaiveDate) -> ExperienceRecord {
        ExperienceRecord {
            id,
            company_name: "Acme".to_string(),
            role: "Engineer".to_string(),
            start_date: start,
            end_date: Some(end),
            current: false,
            description: None,
            skills: vec!["Rust".to_string(), "Postgres".to_string()],
        }
    }

    fn command(
        start: NaiveDate,
        end: Option<NaiveDate>,
        current: bool,
        skills: Vec<&str>,
    ) -> ExperienceCommand {
        ExperienceCommand::with_today(
            "Acme".into(),
            "Engineer".into(),
            start,
            end,
            current,
            None,
            skills.into_iter().map(str::to_string).collect(),
            today(),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn overlapping_period_is_rejected() {
        let existing = acme_record(Uuid::new_v4(), d(2020, 1, 1), d(2021, 12, 31));
        let service =
            ExperienceService::new(MockExperienceRepository::new(vec![existing], today()));

        let result = service
            .create_experience(command(
                d(2021, 6, 1),
                Some(d(2022, 6, 1)),
                false,
                vec!["Rust"],
            ))
            .await;

        assert!(matches!(result, Err(ExperienceError::Overlap)));
    }

    #[tokio::test]
    async fn adjacent_periods_sharing_a_day_are_rejected() {
        let existing = acme_record(Uuid::new_v4(), d(2020, 1, 1), d(2020, 12, 31));
        let service =
            ExperienceService::new(MockExperienceRepository::new(vec![existing], today()));

        let result = service
            .create_experience(command(
                d(2020, 12, 31),
                Some(d(2021, 6, 30)),
                false,
                vec![],
            ))
            .await;

        assert!(matches!(result, Err(ExperienceError::Overlap)));
    }

    #[tokio::test]
    async fn disjoint_period_is_accepted() {
        let existing = acme_record(Uuid::new_v4(), d(2020, 1, 1), d(2020, 12, 31));
        let service =
            ExperienceService::new(MockExperienceRepository::new(vec![existing], today()));

        let created = service
            .create_experience(command(d(2021, 1, 1), Some(d(2021, 12, 31)), false, vec![]))
            .await
            .expect("create failed");

        assert_eq!(created.start_date, d(2021, 1, 1));
    }

    #[tokio::test]
    async fn current_position_blocks_periods_up_to_today() {
        let mut existing = acme_record(Uuid::new_v4(), d(2024, 1, 1), d(2024, 1, 1));
        existing.end_date = None;
        existing.current = true;
        let service =
            ExperienceService::new(MockExperienceRepository::new(vec![existing], today()));

        let result = service
            .create_experience(command(d(2025, 6, 1), Some(d(2025, 6, 10)), false, vec![]))
            .await;

        assert!(matches!(result, Err(ExperienceError::Overlap)));
    }

    #[tokio::test]
    async fn reordered_skills_are_no_change() {
        let id = Uuid::new_v4();
        let existing = acme_record(id, d(2020, 1, 1), d(2020, 12, 31));
        let service =
            ExperienceService::new(MockExperienceRepository::new(vec![existing], today()));

        let result = service
            .update_experience(
                id,
                command(
                    d(2020, 1, 1),
                    Some(d(2020, 12, 31)),
                    false,
                    vec!["Postgres", "Rust", "Rust"],
                ),
            )
            .await;

        assert!(matches!(result, Err(ExperienceError::NoChange)));
    }

    #[tokio::test]
    async fn added_skill_is_a_real_change() {
        let id = Uuid::new_v4();
        let existing = acme_record(id, d(2020, 1, 1), d(2020, 12, 31));
        let service =
            ExperienceService::new(MockExperienceRepository::new(vec![existing], today()));

        let updated = service
            .update_experience(
                id,
                command(
                    d(2020, 1, 1),
                    Some(d(2020, 12, 31)),
                    false,
                    vec!["Rust", "Postgres", "Docker"],
                ),
            )
            .await
            .expect("update failed");

        assert!(updated.skills.contains(&"Docker".to_string()));
    }

    #[tokio::test]
    async fn update_keeping_own_period_is_allowed() {
        let id = Uuid::new_v4();
        let existing = acme_record(id, d(2020, 1, 1), d(2020, 12, 31));
        let service =
            ExperienceService::new(MockExperienceRepository::new(vec![existing], today()));

        let updated = service
            .update_experience(
                id,
                command(d(2020, 1, 1), Some(d(2020, 12, 31)), false, vec!["Go"]),
            )
            .await
            .expect("update failed");

        assert_eq!(updated.skills, vec!["Go".to_string()]);
    }

    #[tokio::test]
    async fn listing_no_experiences_is_none_found() {
        let service = ExperienceService::new(MockExperienceRepository::new(Vec::new(), today()));

        let result = service.get_all_experiences().await;

        assert!(matches!(result, Err(ExperienceError::NoneFound)));
    }
}
