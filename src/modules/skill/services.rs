use async_trait::async_trait;
use tracing::{info, warn};
use uuid::Uuid;

use crate::skill::ports::{
    incoming::{SkillCommand, SkillError, SkillUseCase},
    outgoing::{SkillData, SkillRecord, SkillRepository, SkillRepositoryError},
};

#[derive(Debug, Clone)]
pub struct SkillService<R>
where
    R: SkillRepository + Send + Sync,
{
    repository: R,
}

impl<R> SkillService<R>
where
    R: SkillRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    fn to_data(command: &SkillCommand) -> SkillData {
        SkillData {
            name: command.name().to_string(),
            category: command.category().map(str::to_string),
            proficiency: command.proficiency(),
        }
    }

    /// Name comparison is case-insensitive: renaming "go" to "Go" alone
    /// still counts as no change.
    fn is_same(existing: &SkillRecord, command: &SkillCommand) -> bool {
        existing.name.eq_ignore_ascii_case(command.name())
            && existing.category.as_deref() == command.category()
            && existing.proficiency == command.proficiency()
    }
}

fn map_repo_error(err: SkillRepositoryError, name: &str, id: Option<Uuid>) -> SkillError {
    match err {
        SkillRepositoryError::DuplicateName => SkillError::DuplicateName(name.to_string()),
        SkillRepositoryError::NotFound => {
            SkillError::NotFound(id.unwrap_or_default())
        }
        SkillRepositoryError::Database(msg) => SkillError::Repository(msg),
    }
}

#[async_trait]
impl<R> SkillUseCase for SkillService<R>
where
    R: SkillRepository + Send + Sync,
{
    async fn create_skill(&self, command: SkillCommand) -> Result<SkillRecord, SkillError> {
        info!("Creating skill: {}", command.name());

        let created = self
            .repository
            .create(Self::to_data(&command))
            .await
            .map_err(|e| {
                if matches!(e, SkillRepositoryError::DuplicateName) {
                    warn!("Duplicate skill creation attempt: {}", command.name());
                }
                map_repo_error(e, command.name(), None)
            })?;

        Ok(created)
    }

    async fn update_skill(
        &self,
        id: Uuid,
        command: SkillCommand,
    ) -> Result<SkillRecord, SkillError> {
        info!("Updating skill with id: {}", id);

        let existing = self
            .repository
            .find_by_id(id)
            .await
            .map_err(|e| map_repo_error(e, command.name(), Some(id)))?
            .ok_or(SkillError::NotFound(id))?;

        if Self::is_same(&existing, &command) {
            warn!("No change detected for skill update id: {}", id);
            return Err(SkillError::NoChange);
        }

        self.repository
            .update(id, Self::to_data(&command))
            .await
            .map_err(|e| map_repo_error(e, command.name(), Some(id)))
    }

    async fn delete_skill(&self, id: Uuid) -> Result<(), SkillError> {
        info!("Deleting skill with id: {}", id);

        self.repository
            .delete(id)
            .await
            .map_err(|e| map_repo_error(e, "", Some(id)))
    }

    async fn get_all_skills(&self) -> Result<Vec<SkillRecord>, SkillError> {
        let skills = self
            .repository
            .find_all()
            .await
            .map_err(|e| map_repo_error(e, "", None))?;

        if skills.is_empty() {
            return Err(SkillError::NoneFound);
        }

        Ok(skills)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // ──────────────────────────────────────────────────────────
    // Mock Repository
    // ──────────────────────────────────────────────────────────

    #[derive(Default)]
    struct MockSkillRepository {
        skills: Mutex<Vec<SkillRecord>>,
        fail_with: Option<SkillRepositoryError>,
    }

    impl MockSkillRepository {
        fn with_skills(skills: Vec<SkillRecord>) -> Self {
            Self {
                skills: Mutex::new(skills),
                fail_with: None,
            }
        }

        fn failing(err: SkillRepositoryError) -> Self {
            Self {
                skills: Mutex::new(Vec::new()),
                fail_with: Some(err),
            }
        }
    }

    #[async_trait]
    impl SkillRepository for MockSkillRepository {
        async fn create(&self, data: SkillData) -> Result<SkillRecord, SkillRepositoryError> {
            if let Some(err) = &self.fail_with {
                return Err(err.clone());
            }

            let mut skills = self.skills.lock().unwrap();
            if skills
                .iter()
                .any(|s| s.name.eq_ignore_ascii_case(&data.name))
            {
                return Err(SkillRepositoryError::DuplicateName);
            }

            let record = SkillRecord {
                id: Uuid::new_v4(),
                name: data.name,
                category: data.category,
                proficiency: data.proficiency,
            };
            skills.push(record.clone());
            Ok(record)
        }

        async fn update(
            &self,
            id: Uuid,
            data: SkillData,
        ) -> Result<SkillRecord, SkillRepositoryError> {
            if let Some(err) = &self.fail_with {
                return Err(err.clone());
            }

            let mut skills = self.skills.lock().unwrap();
            if skills
                .iter()
                .any(|s| s.id != id && s.name.eq_ignore_ascii_case(&data.name))
            {
                return Err(SkillRepositoryError::DuplicateName);
            }

            let skill = skills
                .iter_mut()
                .find(|s| s.id == id)
                .ok_or(SkillRepositoryError::NotFound)?;
            skill.name = data.name;
            skill.category = data.category;
            skill.proficiency = data.proficiency;
            Ok(skill.clone())
        }

        async fn delete(&self, id: Uuid) -> Result<(), SkillRepositoryError> {
            let mut skills = self.skills.lock().unwrap();
            let before = skills.len();
            skills.retain(|s| s.id != id);
            if skills.len() == before {
                return Err(SkillRepositoryError::NotFound);
            }
            Ok(())
        }

        async fn find_by_id(
            &self,
            id: Uuid,
        ) -> Result<Option<SkillRecord>, SkillRepositoryError> {
            Ok(self
                .skills
                .lock()
                .unwrap()
                .iter()
                .find(|s| s.id == id)
                .cloned())
        }

        async fn find_all(&self) -> Result<Vec<SkillRecord>, SkillRepositoryError> {
            Ok(self.skills.lock().unwrap().clone())
        }
    }

    fn go_skill(id: Uuid) -> SkillRecord {
        SkillRecord {
            id,
            name: "Go".to_string(),
            category: Some("backend".to_string()),
            proficiency: 4,
        }
    }

    // ──────────────────────────────────────────────────────────
    // Tests
    // ──────────────────────────────────────────────────────────

    #[tokio::test]
    async fn create_skill_success() {
        // Arrange
        let service = SkillService::new(MockSkillRepository::default());
        let command =
            SkillCommand::new("Go".into(), Some("backend".into()), Some(4)).unwrap();

        // Act
        let result = service.create_skill(command).await;

        // Assert
        let skill = result.expect("expected success");
        assert_eq!(skill.name, "Go");
        assert_eq!(skill.proficiency, 4);
    }

    #[tokio::test]
    async fn create_skill_rejects_case_insensitive_duplicate() {
        // Arrange: "Go" already exists, candidate is "go"
        let service =
            SkillService::new(MockSkillRepository::with_skills(vec![go_skill(Uuid::new_v4())]));
        let command = SkillCommand::new("go".into(), None, Some(2)).unwrap();

        // Act
        let result = service.create_skill(command).await;

        // Assert
        assert!(matches!(result, Err(SkillError::DuplicateName(name)) if name == "go"));
    }

    #[tokio::test]
    async fn update_skill_identical_values_is_no_change() {
        let id = Uuid::new_v4();
        let service = SkillService::new(MockSkillRepository::with_skills(vec![go_skill(id)]));

        let command =
            SkillCommand::new("Go".into(), Some("backend".into()), Some(4)).unwrap();

        let result = service.update_skill(id, command).await;

        assert!(matches!(result, Err(SkillError::NoChange)));
    }

    #[tokio::test]
    async fn update_skill_case_only_rename_is_no_change() {
        let id = Uuid::new_v4();
        let service = SkillService::new(MockSkillRepository::with_skills(vec![go_skill(id)]));

        let command =
            SkillCommand::new("GO".into(), Some("backend".into()), Some(4)).unwrap();

        let result = service.update_skill(id, command).await;

        assert!(matches!(result, Err(SkillError::NoChange)));
    }

    #[tokio::test]
    async fn update_skill_proficiency_bump_succeeds() {
        let id = Uuid::new_v4();
        let service = SkillService::new(MockSkillRepository::with_skills(vec![go_skill(id)]));

        let command =
            SkillCommand::new("Go".into(), Some("backend".into()), Some(5)).unwrap();

        let result = service.update_skill(id, command).await;

        let updated = result.expect("expected success");
        assert_eq!(updated.proficiency, 5);
    }

    #[tokio::test]
    async fn update_skill_unknown_id_is_not_found() {
        let id = Uuid::new_v4();
        let service = SkillService::new(MockSkillRepository::default());

        let command = SkillCommand::new("Go".into(), None, Some(3)).unwrap();

        let result = service.update_skill(id, command).await;

        assert!(matches!(result, Err(SkillError::NotFound(missing)) if missing == id));
    }

    #[tokio::test]
    async fn get_all_skills_empty_is_none_found() {
        let service = SkillService::new(MockSkillRepository::default());

        let result = service.get_all_skills().await;

        assert!(matches!(result, Err(SkillError::NoneFound)));
    }

    #[tokio::test]
    async fn repository_error_is_mapped() {
        let service = SkillService::new(MockSkillRepository::failing(
            SkillRepositoryError::Database("connection lost".into()),
        ));

        let command = SkillCommand::new("Go".into(), None, Some(3)).unwrap();
        let result = service.create_skill(command).await;

        match result {
            Err(SkillError::Repository(msg)) => assert!(msg.contains("connection lost")),
            other => panic!("Expected Repository error, got {:?}", other),
        }
    }
}
