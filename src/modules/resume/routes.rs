use actix_multipart::Multipart;
use actix_web::{delete, get, http::header, post, put, web, HttpResponse, Responder};
use uuid::Uuid;

use crate::{
    resume::ports::incoming::ResumeError,
    resume::ports::outgoing::ResumeFile,
    resume::upload_policy::ResumeRejection,
    shared::api::multipart::{read_file_field, MultipartReadError},
    shared::api::ApiResponse,
    shared::auth::AdminGuard,
    AppState,
};

#[utoipa::path(
    post,
    path = "/api/resume/upload",
    request_body(content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Resume stored and activated"),
        (status = 400, description = "Upload refused by the file policy"),
        (status = 401, description = "Admin token missing or wrong")
    ),
    tag = "resumes"
)]
#[post("/api/resume/upload")]
pub async fn upload_resume_handler(
    _admin: AdminGuard,
    data: web::Data<AppState>,
    payload: Multipart,
) -> impl Responder {
    let file = match read_file_field(payload).await {
        Ok(file) => file,
        Err(err) => return map_multipart_error(err),
    };

    match data
        .resume_use_case
        .upload_resume(file.original_file_name, file.content_type, file.bytes)
        .await
    {
        Ok(record) => ApiResponse::created(record),
        Err(err) => map_resume_error(err),
    }
}

#[utoipa::path(
    get,
    path = "/api/resumes",
    responses(
        (status = 200, description = "All stored resumes, newest first")
    ),
    tag = "resumes"
)]
#[get("/api/resumes")]
pub async fn get_resumes_handler(data: web::Data<AppState>) -> impl Responder {
    match data.resume_use_case.get_all_resumes().await {
        Ok(resumes) => ApiResponse::success(resumes),
        Err(err) => map_resume_error(err),
    }
}

#[utoipa::path(
    put,
    path = "/api/resume/{id}/activate",
    responses(
        (status = 200, description = "Resume is now the active one"),
        (status = 404, description = "Unknown resume id")
    ),
    tag = "resumes"
)]
#[put("/api/resume/{id}/activate")]
pub async fn activate_resume_handler(
    _admin: AdminGuard,
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> impl Responder {
    match data.resume_use_case.activate_resume(path.into_inner()).await {
        Ok(record) => ApiResponse::success(record),
        Err(err) => map_resume_error(err),
    }
}

#[utoipa::path(
    delete,
    path = "/api/resume/{id}",
    responses(
        (status = 204, description = "Resume removed"),
        (status = 404, description = "Unknown resume id")
    ),
    tag = "resumes"
)]
#[delete("/api/resume/{id}")]
pub async fn delete_resume_handler(
    _admin: AdminGuard,
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> impl Responder {
    match data.resume_use_case.delete_resume(path.into_inner()).await {
        Ok(()) => ApiResponse::no_content(),
        Err(err) => map_resume_error(err),
    }
}

#[utoipa::path(
    get,
    path = "/api/resume/download",
    responses(
        (status = 200, description = "Active resume as an attachment"),
        (status = 404, description = "No active resume")
    ),
    tag = "resumes"
)]
#[get("/api/resume/download")]
pub async fn download_resume_handler(data: web::Data<AppState>) -> impl Responder {
    match data.resume_use_case.download_active().await {
        Ok(file) => file_response(file, "attachment"),
        Err(err) => map_resume_error(err),
    }
}

#[utoipa::path(
    get,
    path = "/api/resume/preview/{id}",
    responses(
        (status = 200, description = "Resume rendered inline"),
        (status = 404, description = "Unknown resume id")
    ),
    tag = "resumes"
)]
#[get("/api/resume/preview/{id}")]
pub async fn preview_resume_handler(
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> impl Responder {
    match data.resume_use_case.preview_resume(path.into_inner()).await {
        Ok(file) => file_response(file, "inline"),
        Err(err) => map_resume_error(err),
    }
}

#[utoipa::path(
    get,
    path = "/api/resume/download-info",
    responses(
        (status = 200, description = "Availability metadata for the active resume")
    ),
    tag = "resumes"
)]
#[get("/api/resume/download-info")]
pub async fn resume_download_info_handler(data: web::Data<AppState>) -> impl Responder {
    match data.resume_use_case.download_info().await {
        Ok(info) => ApiResponse::success(info),
        Err(err) => map_resume_error(err),
    }
}

fn file_response(file: ResumeFile, disposition: &str) -> HttpResponse {
    HttpResponse::Ok()
        .insert_header((header::CONTENT_TYPE, file.content_type))
        .insert_header((header::CONTENT_LENGTH, file.file_data.len()))
        .insert_header((
            header::CONTENT_DISPOSITION,
            format!(
                "{}; filename=\"{}\"",
                disposition, file.original_file_name
            ),
        ))
        .body(file.file_data)
}

fn map_multipart_error(err: MultipartReadError) -> HttpResponse {
    match err {
        MultipartReadError::MissingFile => {
            ApiResponse::bad_request("MISSING_FILE", &err.to_string())
        }
        MultipartReadError::ReadFailure(_) => ApiResponse::internal_error(),
    }
}

fn map_resume_error(err: ResumeError) -> HttpResponse {
    match err {
        ResumeError::Rejected(ref rejection) => {
            let code = match rejection {
                ResumeRejection::InvalidContentType(_) | ResumeRejection::InvalidExtension(_) => {
                    "INVALID_FILE_TYPE"
                }
                ResumeRejection::TooLarge => "FILE_TOO_LARGE",
                ResumeRejection::TooSmall => "FILE_TOO_SMALL",
            };
            ApiResponse::bad_request(code, &err.to_string())
        }
        ResumeError::NotFound(_) => ApiResponse::not_found("RESUME_NOT_FOUND", &err.to_string()),
        ResumeError::NoActiveResume => {
            ApiResponse::not_found("NO_ACTIVE_RESUME", &err.to_string())
        }
        ResumeError::Repository(_) => ApiResponse::internal_error(),
    }
}
