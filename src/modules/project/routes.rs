use actix_web::{delete, get, post, put, web, Responder};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    project::ports::incoming::{ProjectCommand, ProjectCommandError, ProjectError},
    shared::api::ApiResponse,
    shared::auth::AdminGuard,
    AppState,
};

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRequest {
    pub title: String,
    pub description: String,
    pub tech_stack: Option<String>,
    pub github_link: Option<String>,
    pub live_demo_link: Option<String>,
}

impl ProjectRequest {
    fn into_command(self) -> Result<ProjectCommand, ProjectCommandError> {
        ProjectCommand::new(
            self.title,
            self.description,
            self.tech_stack,
            self.github_link,
            self.live_demo_link,
        )
    }
}

#[get("/api/projects")]
pub async fn get_projects_handler(data: web::Data<AppState>) -> impl Responder {
    match data.project_use_case.get_all_projects().await {
        Ok(projects) => ApiResponse::success(projects),
        Err(err) => map_project_error(err),
    }
}

#[post("/api/project")]
pub async fn create_project_handler(
    _admin: AdminGuard,
    data: web::Data<AppState>,
    payload: web::Json<ProjectRequest>,
) -> impl Responder {
    let command = match payload.into_inner().into_command() {
        Ok(cmd) => cmd,
        Err(err) => return map_command_error(err),
    };

    match data.project_use_case.create_project(command).await {
        Ok(project) => ApiResponse::created(project),
        Err(err) => map_project_error(err),
    }
}

#[put("/api/project/{id}")]
pub async fn update_project_handler(
    _admin: AdminGuard,
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
    payload: web::Json<ProjectRequest>,
) -> impl Responder {
    let command = match payload.into_inner().into_command() {
        Ok(cmd) => cmd,
        Err(err) => return map_command_error(err),
    };

    match data
        .project_use_case
        .update_project(path.into_inner(), command)
        .await
    {
        Ok(project) => ApiResponse::success(project),
        Err(err) => map_project_error(err),
    }
}

#[delete("/api/project/{id}")]
pub async fn delete_project_handler(
    _admin: AdminGuard,
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> impl Responder {
    match data.project_use_case.delete_project(path.into_inner()).await {
        Ok(()) => ApiResponse::no_content(),
        Err(err) => map_project_error(err),
    }
}

fn map_command_error(err: ProjectCommandError) -> actix_web::HttpResponse {
    match err {
        ProjectCommandError::MissingFields(fields) => {
            ApiResponse::validation_error("Required fields are missing or blank", fields)
        }
        ProjectCommandError::TitleTooLong => {
            ApiResponse::validation_error(&err.to_string(), vec!["title".to_string()])
        }
    }
}

fn map_project_error(err: ProjectError) -> actix_web::HttpResponse {
    match err {
        ProjectError::DuplicateTitle(_) => {
            ApiResponse::bad_request("DUPLICATE_PROJECT", &err.to_string())
        }
        ProjectError::NotFound(_) => ApiResponse::not_found("PROJECT_NOT_FOUND", &err.to_string()),
        ProjectError::NoChange => ApiResponse::bad_request("NO_CHANGES", &err.to_string()),
        ProjectError::NoneFound => ApiResponse::not_found("NO_PROJECTS_FOUND", &err.to_string()),
        ProjectError::Repository(_) => ApiResponse::internal_error(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use std::sync::Arc;

    use crate::{
        project::ports::{incoming::ProjectUseCase, outgoing::ProjectRecord},
        shared::auth::{AdminTokenPolicy, ADMIN_TOKEN_HEADER},
        tests::support::app_state_builder::TestAppStateBuilder,
    };

    struct DuplicatingProjects;

    #[async_trait]
    impl ProjectUseCase for DuplicatingProjects {
        async fn create_project(
            &self,
            command: ProjectCommand,
        ) -> Result<ProjectRecord, ProjectError> {
            Err(ProjectError::DuplicateTitle(command.title().to_string()))
        }

        async fn update_project(
            &self,
            _id: Uuid,
            _command: ProjectCommand,
        ) -> Result<ProjectRecord, ProjectError> {
            unimplemented!()
        }

        async fn delete_project(&self, _id: Uuid) -> Result<(), ProjectError> {
            unimplemented!()
        }

        async fn get_all_projects(&self) -> Result<Vec<ProjectRecord>, ProjectError> {
            unimplemented!()
        }
    }

    #[actix_web::test]
    async fn duplicate_title_maps_to_bad_request() {
        let state = TestAppStateBuilder::default()
            .with_project(Arc::new(DuplicatingProjects))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(web::Data::new(AdminTokenPolicy::new(
                    "test-admin-token".to_string(),
                )))
                .service(create_project_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/project")
            .insert_header((ADMIN_TOKEN_HEADER, "test-admin-token"))
            .set_json(serde_json::json!({
                "title": "Portfolio",
                "description": "Personal portfolio site"
            }))
            .to_request();

        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body = test::read_body(resp).await;
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"]["code"], "DUPLICATE_PROJECT");
    }

    #[actix_web::test]
    async fn create_without_token_is_unauthorized() {
        let state = TestAppStateBuilder::default()
            .with_project(Arc::new(DuplicatingProjects))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(web::Data::new(AdminTokenPolicy::new(
                    "test-admin-token".to_string(),
                )))
                .service(create_project_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/project")
            .set_json(serde_json::json!({
                "title": "Portfolio",
                "description": "Personal portfolio site"
            }))
            .to_request();

        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }
}
