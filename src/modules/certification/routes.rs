use actix_web::{delete, get, post, put, web, Responder};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    certification::ports::incoming::{
        CertificationCommand, CertificationCommandError, CertificationError,
    },
    shared::api::ApiResponse,
    shared::auth::AdminGuard,
    AppState,
};

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CertificationRequest {
    pub title: String,
    pub description: String,
    pub month_year: String,
    pub certification_link: Option<String>,
}

impl CertificationRequest {
    fn into_command(self) -> Result<CertificationCommand, CertificationCommandError> {
        CertificationCommand::new(
            self.title,
            self.description,
            self.month_year,
            self.certification_link,
        )
    }
}

#[get("/api/certifications")]
pub async fn get_certifications_handler(data: web::Data<AppState>) -> impl Responder {
    match data.certification_use_case.get_all_certifications().await {
        Ok(certifications) => ApiResponse::success(certifications),
        Err(err) => map_certification_error(err),
    }
}

#[post("/api/certification")]
pub async fn create_certification_handler(
    _admin: AdminGuard,
    data: web::Data<AppState>,
    payload: web::Json<CertificationRequest>,
) -> impl Responder {
    let command = match payload.into_inner().into_command() {
        Ok(cmd) => cmd,
        Err(err) => return map_command_error(err),
    };

    match data.certification_use_case.create_certification(command).await {
        Ok(certification) => ApiResponse::created(certification),
        Err(err) => map_certification_error(err),
    }
}

#[put("/api/certification/{id}")]
pub async fn update_certification_handler(
    _admin: AdminGuard,
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
    payload: web::Json<CertificationRequest>,
) -> impl Responder {
    let command = match payload.into_inner().into_command() {
        Ok(cmd) => cmd,
        Err(err) => return map_command_error(err),
    };

    match data
        .certification_use_case
        .update_certification(path.into_inner(), command)
        .await
    {
        Ok(certification) => ApiResponse::success(certification),
        Err(err) => map_certification_error(err),
    }
}

#[delete("/api/certification/{id}")]
pub async fn delete_certification_handler(
    _admin: AdminGuard,
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> impl Responder {
    match data
        .certification_use_case
        .delete_certification(path.into_inner())
        .await
    {
        Ok(()) => ApiResponse::no_content(),
        Err(err) => map_certification_error(err),
    }
}

fn map_command_error(err: CertificationCommandError) -> actix_web::HttpResponse {
    match err {
        CertificationCommandError::MissingFields(fields) => {
            ApiResponse::validation_error("Required fields are missing or blank", fields)
        }
    }
}

fn map_certification_error(err: CertificationError) -> actix_web::HttpResponse {
    match err {
        CertificationError::NotFound(_) => {
            ApiResponse::not_found("CERTIFICATION_NOT_FOUND", &err.to_string())
        }
        CertificationError::NoChange => ApiResponse::bad_request("NO_CHANGES", &err.to_string()),
        CertificationError::NoneFound => {
            ApiResponse::not_found("NO_CERTIFICATIONS_FOUND", &err.to_string())
        }
        CertificationError::Repository(_) => ApiResponse::internal_error(),
    }
}
