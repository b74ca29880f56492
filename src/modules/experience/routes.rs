use actix_web::{delete, get, post, put, web, Responder};
use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    experience::ports::incoming::{
        ExperienceCommand, ExperienceCommandError, ExperienceError,
    },
    shared::api::ApiResponse,
    shared::auth::AdminGuard,
    AppState,
};

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceRequest {
    pub company_name: String,
    pub role: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub current: bool,
    pub description: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
}

impl ExperienceRequest {
    fn into_command(self) -> Result<ExperienceCommand, ExperienceCommandError> {
        ExperienceCommand::new(
            self.company_name,
            self.role,
            self.start_date,
            self.end_date,
            self.current,
            self.description,
            self.skills,
        )
    }
}

#[get("/api/experiences")]
pub async fn get_experiences_handler(data: web::Data<AppState>) -> impl Responder {
    match data.experience_use_case.get_all_experiences().await {
        Ok(experiences) => ApiResponse::success(experiences),
        Err(err) => map_experience_error(err),
    }
}

#[post("/api/experience")]
pub async fn create_experience_handler(
    _admin: AdminGuard,
    data: web::Data<AppState>,
    payload: web::Json<ExperienceRequest>,
) -> impl Responder {
    let command = match payload.into_inner().into_command() {
        Ok(cmd) => cmd,
        Err(err) => return map_command_error(err),
    };

    match data.experience_use_case.create_experience(command).await {
        Ok(experience) => ApiResponse::created(experience),
        Err(err) => map_experience_error(err),
    }
}

#[put("/api/experience/{id}")]
pub async fn update_experience_handler(
    _admin: AdminGuard,
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
    payload: web::Json<ExperienceRequest>,
) -> impl Responder {
    let command = match payload.into_inner().into_command() {
        Ok(cmd) => cmd,
        Err(err) => return map_command_error(err),
    };

    match data
        .experience_use_case
        .update_experience(path.into_inner(), command)
        .await
    {
        Ok(experience) => ApiResponse::success(experience),
        Err(err) => map_experience_error(err),
    }
}

#[delete("/api/experience/{id}")]
pub async fn delete_experience_handler(
    _admin: AdminGuard,
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> impl Responder {
    match data
        .experience_use_case
        .delete_experience(path.into_inner())
        .await
    {
        Ok(()) => ApiResponse::no_content(),
        Err(err) => map_experience_error(err),
    }
}

fn map_command_error(err: ExperienceCommandError) -> actix_web::HttpResponse {
    match err {
        ExperienceCommandError::MissingFields(fields) => {
            ApiResponse::validation_error("Required fields are missing or blank", fields)
        }
        ExperienceCommandError::InvalidDates(violation) => ApiResponse::validation_error(
            &violation.to_string(),
            vec!["startDate".to_string(), "endDate".to_string()],
        ),
    }
}

fn map_experience_error(err: ExperienceError) -> actix_web::HttpResponse {
    match err {
        ExperienceError::NotFound(_) => {
            ApiResponse::not_found("EXPERIENCE_NOT_FOUND", &err.to_string())
        }
        ExperienceError::Overlap => {
            ApiResponse::bad_request("EXPERIENCE_OVERLAP", &err.to_string())
        }
        ExperienceError::NoChange => ApiResponse::bad_request("NO_CHANGES", &err.to_string()),
        ExperienceError::NoneFound => {
            ApiResponse::not_found("NO_EXPERIENCES_FOUND", &err.to_string())
        }
        ExperienceError::Repository(_) => ApiResponse::internal_error(),
    }
}
