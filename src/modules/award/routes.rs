use actix_web::{delete, get, post, put, web, Responder};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    award::ports::incoming::{AwardCommand, AwardCommandError, AwardError},
    shared::api::ApiResponse,
    shared::auth::AdminGuard,
    AppState,
};

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AwardRequest {
    pub award_name: String,
    pub description: String,
    pub award_company_name: String,
    pub award_link: Option<String>,
    pub award_year: Option<String>,
}

impl AwardRequest {
    fn into_command(self) -> Result<AwardCommand, AwardCommandError> {
        AwardCommand::new(
            self.award_name,
            self.description,
            self.award_company_name,
            self.award_link,
            self.award_year,
        )
    }
}

#[get("/api/awards")]
pub async fn get_awards_handler(data: web::Data<AppState>) -> impl Responder {
    match data.award_use_case.get_all_awards().await {
        Ok(awards) => ApiResponse::success(awards),
        Err(err) => map_award_error(err),
    }
}

#[post("/api/award")]
pub async fn create_award_handler(
    _admin: AdminGuard,
    data: web::Data<AppState>,
    payload: web::Json<AwardRequest>,
) -> impl Responder {
    let command = match payload.into_inner().into_command() {
        Ok(cmd) => cmd,
        Err(err) => return map_command_error(err),
    };

    match data.award_use_case.create_award(command).await {
        Ok(award) => ApiResponse::created(award),
        Err(err) => map_award_error(err),
    }
}

#[put("/api/award/{id}")]
pub async fn update_award_handler(
    _admin: AdminGuard,
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
    payload: web::Json<AwardRequest>,
) -> impl Responder {
    let command = match payload.into_inner().into_command() {
        Ok(cmd) => cmd,
        Err(err) => return map_command_error(err),
    };

    match data
        .award_use_case
        .update_award(path.into_inner(), command)
        .await
    {
        Ok(award) => ApiResponse::success(award),
        Err(err) => map_award_error(err),
    }
}

#[delete("/api/award/{id}")]
pub async fn delete_award_handler(
    _admin: AdminGuard,
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> impl Responder {
    match data.award_use_case.delete_award(path.into_inner()).await {
        Ok(()) => ApiResponse::no_content(),
        Err(err) => map_award_error(err),
    }
}

fn map_command_error(err: AwardCommandError) -> actix_web::HttpResponse {
    match err {
        AwardCommandError::MissingFields(fields) => {
            ApiResponse::validation_error("Required fields are missing or blank", fields)
        }
    }
}

fn map_award_error(err: AwardError) -> actix_web::HttpResponse {
    match err {
        AwardError::NotFound(_) => ApiResponse::not_found("AWARD_NOT_FOUND", &err.to_string()),
        AwardError::NoChange => ApiResponse::bad_request("NO_CHANGES", &err.to_string()),
        AwardError::NoneFound => ApiResponse::not_found("NO_AWARDS_FOUND", &err.to_string()),
        AwardError::Repository(_) => ApiResponse::internal_error(),
    }
}
