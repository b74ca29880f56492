use async_trait::async_trait;
use tracing::{info, warn};
use uuid::Uuid;

use crate::project::ports::{
    incoming::{ProjectCommand, ProjectError, ProjectUseCase},
    outgoing::{ProjectData, ProjectRecord, ProjectRepository, ProjectRepositoryError},
};

#[derive(Debug, Clone)]
pub struct ProjectService<R>
where
    R: ProjectRepository + Send + Sync,
{
    repository: R,
}

impl<R> ProjectService<R>
where
    R: ProjectRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    fn to_data(command: &ProjectCommand) -> ProjectData {
        ProjectData {
            title: command.title().to_string(),
            description: command.description().to_string(),
            tech_stack: command.tech_stack().map(str::to_string),
            github_link: command.github_link().map(str::to_string),
            live_demo_link: command.live_demo_link().map(str::to_string),
        }
    }

    fn is_same(existing: &ProjectRecord, command: &ProjectCommand) -> bool {
        existing.title == command.title()
            && existing.description == command.description()
            && existing.tech_stack.as_deref() == command.tech_stack()
            && existing.github_link.as_deref() == command.github_link()
            && existing.live_demo_link.as_deref() == command.live_demo_link()
    }
}

fn map_repo_error(err: ProjectRepositoryError, title: &str, id: Option<Uuid>) -> ProjectError {
    match err {
        ProjectRepositoryError::NotFound => ProjectError::NotFound(id.unwrap_or_default()),
        ProjectRepositoryError::DuplicateTitle => ProjectError::DuplicateTitle(title.to_string()),
        ProjectRepositoryError::Database(msg) => ProjectError::Repository(msg),
    }
}

#[async_trait]
impl<R> ProjectUseCase for ProjectService<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn create_project(&self, command: ProjectCommand) -> Result<ProjectRecord, ProjectError> {
        info!("Creating new project: {}", command.title());

        self.repository
            .create(Self::to_data(&command))
            .await
            .map_err(|e| map_repo_error(e, command.title(), None))
    }

    async fn update_project(
        &self,
        id: Uuid,
        command: ProjectCommand,
    ) -> Result<ProjectRecord, ProjectError> {
        info!("Updating project with id: {}", id);

        let existing = self
            .repository
            .find_by_id(id)
            .await
            .map_err(|e| map_repo_error(e, command.title(), Some(id)))?
            .ok_or(ProjectError::NotFound(id))?;

        if Self::is_same(&existing, &command) {
            warn!("No change detected for project update id: {}", id);
            return Err(ProjectError::NoChange);
        }

        self.repository
            .update(id, Self::to_data(&command))
            .await
            .map_err(|e| map_repo_error(e, command.title(), Some(id)))
    }

    async fn delete_project(&self, id: Uuid) -> Result<(), ProjectError> {
        info!("Deleting project with id: {}", id);

        self.repository
            .delete(id)
            .await
            .map_err(|e| map_repo_error(e, "", Some(id)))
    }

    async fn get_all_projects(&self) -> Result<Vec<ProjectRecord>, ProjectError> {
        let projects = self
            .repository
            .find_all()
            .await
            .map_err(|e| map_repo_error(e, "", None))?;

        if projects.is_empty() {
            return Err(ProjectError::NoneFound);
        }

        Ok(projects)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MockProjectRepository {
        projects: Mutex<Vec<ProjectRecord>>,
    }

    #[async_trait]
    impl ProjectRepository for MockProjectRepository {
        async fn create(
            &self,
            data: ProjectData,
        ) -> Result<ProjectRecord, ProjectRepositoryError> {
            let mut projects = self.projects.lock().unwrap();
            if projects
                .iter()
                .any(|p| p.title.eq_ignore_ascii_case(&data.title))
            {
                return Err(ProjectRepositoryError::DuplicateTitle);
            }
            let record = ProjectRecord {
                id: Uuid::new_v4(),
                title: data.title,
                description: data.description,
                tech_stack: data.tech_stack,
                github_link: data.github_link,
                live_demo_link: data.live_demo_link,
            };
            projects.push(record.clone());
            Ok(record)
        }

        async fn update(
            &self,
            id: Uuid,
            data: ProjectData,
        ) -> Result<ProjectRecord, ProjectRepositoryError> {
            let mut projects = self.projects.lock().unwrap();
            if projects
                .iter()
                .any(|p| p.id != id && p.title.eq_ignore_ascii_case(&data.title))
            {
                return Err(ProjectRepositoryError::DuplicateTitle);
            }
            let project = projects
                .iter_mut()
                .find(|p| p.id == id)
                .ok_or(ProjectRepositoryError::NotFound)?;
            project.title = data.title;
            project.description = data.description;
            project.tech_stack = data.tech_stack;
            project.github_link = data.github_link;
            project.live_demo_link = data.live_demo_link;
            Ok(project.clone())
        }

        async fn delete(&self, id: Uuid) -> Result<(), ProjectRepositoryError> {
            let mut projects = self.projects.lock().unwrap();
            let before = projects.len();
            projects.retain(|p| p.id != id);
            if projects.len() == before {
                return Err(ProjectRepositoryError::NotFound);
            }
            Ok(())
        }

        async fn find_by_id(
            &self,
            id: Uuid,
        ) -> Result<Option<ProjectRecord>, ProjectRepositoryError> {
            Ok(self
                .projects
                .lock()
                .unwrap()
                .iter()
                .find(|p| p.id == id)
                .cloned())
        }

        async fn find_all(&self) -> Result<Vec<ProjectRecord>, ProjectRepositoryError> {
            Ok(self.projects.lock().unwrap().clone())
        }
    }

    fn portfolio_command(title: &str) -> ProjectCommand {
        ProjectCommand::new(
            title.to_string(),
            "Personal portfolio site".to_string(),
            Some("Rust, Actix".to_string()),
            None,
            None,
        )
        .unwrap()
    }

    #[tokio::test]
    async fn duplicate_title_differing_only_in_case_is_rejected() {
        let service = ProjectService::new(MockProjectRepository::default());

        service
            .create_project(portfolio_command("Portfolio"))
            .await
            .expect("first create failed");

        let result = service.create_project(portfolio_command("PORTFOLIO")).await;

        assert!(
            matches!(result, Err(ProjectError::DuplicateTitle(ref t)) if t == "PORTFOLIO")
        );
    }

    #[tokio::test]
    async fn update_identical_project_is_no_change() {
        let service = ProjectService::new(MockProjectRepository::default());

        let created = service
            .create_project(portfolio_command("Portfolio"))
            .await
            .expect("create failed");

        let result = service
            .update_project(created.id, portfolio_command("Portfolio"))
            .await;

        assert!(matches!(result, Err(ProjectError::NoChange)));
    }

    #[tokio::test]
    async fn update_keeping_own_title_succeeds() {
        let service = ProjectService::new(MockProjectRepository::default());

        let created = service
            .create_project(portfolio_command("Portfolio"))
            .await
            .expect("create failed");

        let command = ProjectCommand::new(
            "Portfolio".to_string(),
            "Rebuilt with a static generator".to_string(),
            None,
            None,
            None,
        )
        .unwrap();

        let updated = service
            .update_project(created.id, command)
            .await
            .expect("update failed");

        assert_eq!(updated.description, "Rebuilt with a static generator");
    }

    #[tokio::test]
    async fn listing_no_projects_is_none_found() {
        let service = ProjectService::new(MockProjectRepository::default());

        let result = service.get_all_projects().await;

        assert!(matches!(result, Err(ProjectError::NoneFound)));
    }
}
