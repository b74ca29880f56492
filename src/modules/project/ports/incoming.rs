use async_trait::async_trait;
use uuid::Uuid;

use super::outgoing::ProjectRecord;

pub const MAX_TITLE_LENGTH: usize = 400;

#[derive(Debug, Clone)]
pub struct ProjectCommand {
    title: String,
    description: String,
    tech_stack: Option<String>,
    github_link: Option<String>,
    live_demo_link: Option<String>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProjectCommandError {
    #[error("Required fields are missing or blank")]
    MissingFields(Vec<String>),

    #[error("Title must not exceed {MAX_TITLE_LENGTH} characters")]
    TitleTooLong,
}

impl ProjectCommand {
    pub fn new(
        title: String,
        description: String,
        tech_stack: Option<String>,
        github_link: Option<String>,
        live_demo_link: Option<String>,
    ) -> Result<Self, ProjectCommandError> {
        let mut missing = Vec::new();
        if title.trim().is_empty() {
            missing.push("title".to_string());
        }
        if description.trim().is_empty() {
            missing.push("description".to_string());
        }
        if !missing.is_empty() {
            return Err(ProjectCommandError::MissingFields(missing));
        }

        if title.chars().count() > MAX_TITLE_LENGTH {
            return Err(ProjectCommandError::TitleTooLong);
        }

        Ok(Self {
            title,
            description,
            tech_stack,
            github_link,
            live_demo_link,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn tech_stack(&self) -> Option<&str> {
        self.tech_stack.as_deref()
    }

    pub fn github_link(&self) -> Option<&str> {
        self.github_link.as_deref()
    }

    pub fn live_demo_link(&self) -> Option<&str> {
        self.live_demo_link.as_deref()
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProjectError {
    #[error("A project with title '{0}' already exists")]
    DuplicateTitle(String),

    #[error("Project not found with id: {0}")]
    NotFound(Uuid),

    #[error("No changes detected in the request")]
    NoChange,

    #[error("No projects available to fetch")]
    NoneFound,

    #[error("Repository error: {0}")]
    Repository(String),
}

#[async_trait]
pub trait ProjectUseCase: Send + Sync {
    async fn create_project(&self, command: ProjectCommand) -> Result<ProjectRecord, ProjectError>;

    async fn update_project(
        &self,
        id: Uuid,
        command: ProjectCommand,
    ) -> Result<ProjectRecord, ProjectError>;

    async fn delete_project(&self, id: Uuid) -> Result<(), ProjectError>;

    async fn get_all_projects(&self) -> Result<Vec<ProjectRecord>, ProjectError>;
}
