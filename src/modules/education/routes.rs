use actix_web::{delete, get, post, put, web, Responder};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    education::ports::incoming::{EducationCommand, EducationCommandError, EducationError},
    shared::api::ApiResponse,
    shared::auth::AdminGuard,
    AppState,
};

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EducationRequest {
    pub degree: String,
    pub field: String,
    pub university: String,
    pub institute: String,
    pub location: Option<String>,
    pub start_date: String,
    pub end_date: Option<String>,
    #[serde(default)]
    pub currently_studying: bool,
    pub grade: String,
    pub education_type: String,
    pub description: Option<String>,
}

impl EducationRequest {
    fn into_command(self) -> Result<EducationCommand, EducationCommandError> {
        EducationCommand::new(
            self.degree,
            self.field,
            self.university,
            self.institute,
            self.location,
            self.start_date,
            self.end_date,
            self.currently_studying,
            self.grade,
            self.education_type,
            self.description,
        )
    }
}

#[get("/api/educations")]
pub async fn get_educations_handler(data: web::Data<AppState>) -> impl Responder {
    match data.education_use_case.get_all_educations().await {
        Ok(educations) => ApiResponse::success(educations),
        Err(err) => map_education_error(err),
    }
}

#[post("/api/education")]
pub async fn create_education_handler(
    _admin: AdminGuard,
    data: web::Data<AppState>,
    payload: web::Json<EducationRequest>,
) -> impl Responder {
    let command = match payload.into_inner().into_command() {
        Ok(cmd) => cmd,
        Err(err) => return map_command_error(err),
    };

    match data.education_use_case.create_education(command).await {
        Ok(education) => ApiResponse::created(education),
        Err(err) => map_education_error(err),
    }
}

#[put("/api/education/{id}")]
pub async fn update_education_handler(
    _admin: AdminGuard,
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
    payload: web::Json<EducationRequest>,
) -> impl Responder {
    let command = match payload.into_inner().into_command() {
        Ok(cmd) => cmd,
        Err(err) => return map_command_error(err),
    };

    match data
        .education_use_case
        .update_education(path.into_inner(), command)
        .await
    {
        Ok(education) => ApiResponse::success(education),
        Err(err) => map_education_error(err),
    }
}

#[delete("/api/education/{id}")]
pub async fn delete_education_handler(
    _admin: AdminGuard,
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> impl Responder {
    match data
        .education_use_case
        .delete_education(path.into_inner())
        .await
    {
        Ok(()) => ApiResponse::no_content(),
        Err(err) => map_education_error(err),
    }
}

fn map_command_error(err: EducationCommandError) -> actix_web::HttpResponse {
    match err {
        EducationCommandError::MissingFields(fields) => {
            ApiResponse::validation_error("Required fields are missing or blank", fields)
        }
        EducationCommandError::EndDateWhileStudying
        | EducationCommandError::EndDateRequired
        | EducationCommandError::EndBeforeStart => {
            ApiResponse::validation_error(&err.to_string(), vec!["endDate".to_string()])
        }
    }
}

fn map_education_error(err: EducationError) -> actix_web::HttpResponse {
    match err {
        EducationError::NotFound(_) => {
            ApiResponse::not_found("EDUCATION_NOT_FOUND", &err.to_string())
        }
        EducationError::DuplicatePeriod => {
            ApiResponse::bad_request("DUPLICATE_EDUCATION", &err.to_string())
        }
        EducationError::NoChange => ApiResponse::bad_request("NO_CHANGES", &err.to_string()),
        EducationError::NoneFound => {
            ApiResponse::not_found("NO_EDUCATIONS_FOUND", &err.to_string())
        }
        EducationError::Repository(_) => ApiResponse::internal_error(),
    }
}
