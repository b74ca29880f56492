use actix_web::{delete, get, post, put, web, Responder};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    shared::api::ApiResponse,
    shared::auth::AdminGuard,
    skill::ports::incoming::{SkillCommand, SkillCommandError, SkillError},
    AppState,
};

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize, ToSchema)]
pub struct SkillRequest {
    pub name: String,
    pub category: Option<String>,
    pub proficiency: Option<i32>,
}

impl SkillRequest {
    fn into_command(self) -> Result<SkillCommand, SkillCommandError> {
        SkillCommand::new(self.name, self.category, self.proficiency)
    }
}

//
// ──────────────────────────────────────────────────────────
// Routes
// ──────────────────────────────────────────────────────────
//

#[utoipa::path(
    get,
    path = "/api/skills",
    responses(
        (status = 200, description = "All recorded skills"),
        (status = 404, description = "No skills recorded yet")
    ),
    tag = "skills"
)]
#[get("/api/skills")]
pub async fn get_skills_handler(data: web::Data<AppState>) -> impl Responder {
    match data.skill_use_case.get_all_skills().await {
        Ok(skills) => ApiResponse::success(skills),
        Err(err) => map_skill_error(err),
    }
}

#[utoipa::path(
    post,
    path = "/api/skill",
    request_body = SkillRequest,
    responses(
        (status = 201, description = "Skill created"),
        (status = 400, description = "Validation failure or duplicate name"),
        (status = 401, description = "Admin token missing or wrong")
    ),
    tag = "skills"
)]
#[post("/api/skill")]
pub async fn create_skill_handler(
    _admin: AdminGuard,
    data: web::Data<AppState>,
    payload: web::Json<SkillRequest>,
) -> impl Responder {
    let command = match payload.into_inner().into_command() {
        Ok(cmd) => cmd,
        Err(err) => return map_command_error(err),
    };

    match data.skill_use_case.create_skill(command).await {
        Ok(skill) => ApiResponse::created(skill),
        Err(err) => map_skill_error(err),
    }
}

#[utoipa::path(
    put,
    path = "/api/skill/{id}",
    request_body = SkillRequest,
    responses(
        (status = 200, description = "Skill replaced"),
        (status = 400, description = "Validation failure, duplicate or no-op update"),
        (status = 404, description = "Unknown skill id")
    ),
    tag = "skills"
)]
#[put("/api/skill/{id}")]
pub async fn update_skill_handler(
    _admin: AdminGuard,
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
    payload: web::Json<SkillRequest>,
) -> impl Responder {
    let command = match payload.into_inner().into_command() {
        Ok(cmd) => cmd,
        Err(err) => return map_command_error(err),
    };

    match data
        .skill_use_case
        .update_skill(path.into_inner(), command)
        .await
    {
        Ok(skill) => ApiResponse::success(skill),
        Err(err) => map_skill_error(err),
    }
}

#[utoipa::path(
    delete,
    path = "/api/skill/{id}",
    responses(
        (status = 204, description = "Skill removed"),
        (status = 404, description = "Unknown skill id")
    ),
    tag = "skills"
)]
#[delete("/api/skill/{id}")]
pub async fn delete_skill_handler(
    _admin: AdminGuard,
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> impl Responder {
    match data.skill_use_case.delete_skill(path.into_inner()).await {
        Ok(()) => ApiResponse::no_content(),
        Err(err) => map_skill_error(err),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_command_error(err: SkillCommandError) -> actix_web::HttpResponse {
    match err {
        SkillCommandError::MissingFields(fields) => {
            ApiResponse::validation_error("Required fields are missing or blank", fields)
        }
        SkillCommandError::ProficiencyOutOfRange => ApiResponse::validation_error(
            "Proficiency must be between 0 and 5",
            vec!["proficiency".to_string()],
        ),
    }
}

fn map_skill_error(err: SkillError) -> actix_web::HttpResponse {
    match err {
        SkillError::DuplicateName(_) => {
            ApiResponse::bad_request("DUPLICATE_SKILL", &err.to_string())
        }
        SkillError::NotFound(_) => ApiResponse::not_found("SKILL_NOT_FOUND", &err.to_string()),
        SkillError::NoChange => ApiResponse::bad_request("NO_CHANGES", &err.to_string()),
        SkillError::NoneFound => ApiResponse::not_found("NO_SKILLS_FOUND", &err.to_string()),
        SkillError::Repository(_) => ApiResponse::internal_error(),
    }
}
