use actix_multipart::Multipart;
use actix_web::{delete, get, http::header, post, put, web, HttpResponse, Responder};
use uuid::Uuid;

use crate::{
    profile_photo::ports::incoming::ProfilePhotoError,
    profile_photo::ports::outgoing::ProfilePhotoFile,
    profile_photo::upload_policy::PhotoRejection,
    shared::api::multipart::{read_file_field, MultipartReadError},
    shared::api::ApiResponse,
    shared::auth::AdminGuard,
    AppState,
};

/// Individual photos are immutable, so views cache for a day. The active
/// photo can be switched, so that alias caches for an hour only.
const VIEW_CACHE_CONTROL: &str = "public, max-age=86400";
const ACTIVE_CACHE_CONTROL: &str = "public, max-age=3600";

#[utoipa::path(
    post,
    path = "/api/profile-photo/upload",
    request_body(content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Photo stored and activated"),
        (status = 400, description = "Upload refused by the image policy"),
        (status = 401, description = "Admin token missing or wrong")
    ),
    tag = "profile-photos"
)]
#[post("/api/profile-photo/upload")]
pub async fn upload_photo_handler(
    _admin: AdminGuard,
    data: web::Data<AppState>,
    payload: Multipart,
) -> impl Responder {
    let file = match read_file_field(payload).await {
        Ok(file) => file,
        Err(err) => return map_multipart_error(err),
    };

    match data
        .profile_photo_use_case
        .upload_photo(file.original_file_name, file.content_type, file.bytes)
        .await
    {
        Ok(record) => ApiResponse::created(record),
        Err(err) => map_photo_error(err),
    }
}

#[utoipa::path(
    get,
    path = "/api/profile-photos",
    responses(
        (status = 200, description = "All stored photos, newest first")
    ),
    tag = "profile-photos"
)]
#[get("/api/profile-photos")]
pub async fn get_photos_handler(data: web::Data<AppState>) -> impl Responder {
    match data.profile_photo_use_case.get_all_photos().await {
        Ok(photos) => ApiResponse::success(photos),
        Err(err) => map_photo_error(err),
    }
}

#[utoipa::path(
    put,
    path = "/api/profile-photo/{id}/activate",
    responses(
        (status = 200, description = "Photo is now the active one"),
        (status = 404, description = "Unknown photo id")
    ),
    tag = "profile-photos"
)]
#[put("/api/profile-photo/{id}/activate")]
pub async fn activate_photo_handler(
    _admin: AdminGuard,
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> impl Responder {
    match data
        .profile_photo_use_case
        .activate_photo(path.into_inner())
        .await
    {
        Ok(record) => ApiResponse::success(record),
        Err(err) => map_photo_error(err),
    }
}

#[utoipa::path(
    delete,
    path = "/api/profile-photo/{id}",
    responses(
        (status = 204, description = "Photo removed"),
        (status = 404, description = "Unknown photo id")
    ),
    tag = "profile-photos"
)]
#[delete("/api/profile-photo/{id}")]
pub async fn delete_photo_handler(
    _admin: AdminGuard,
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> impl Responder {
    match data
        .profile_photo_use_case
        .delete_photo(path.into_inner())
        .await
    {
        Ok(()) => ApiResponse::no_content(),
        Err(err) => map_photo_error(err),
    }
}

#[utoipa::path(
    get,
    path = "/api/profile-photo/view/{id}",
    responses(
        (status = 200, description = "Photo bytes rendered inline"),
        (status = 404, description = "Unknown photo id")
    ),
    tag = "profile-photos"
)]
#[get("/api/profile-photo/view/{id}")]
pub async fn view_photo_handler(
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> impl Responder {
    match data
        .profile_photo_use_case
        .view_photo(path.into_inner())
        .await
    {
        Ok(file) => photo_response(file, VIEW_CACHE_CONTROL),
        Err(err) => map_photo_error(err),
    }
}

#[utoipa::path(
    get,
    path = "/api/profile-photo/active",
    responses(
        (status = 200, description = "Active photo bytes rendered inline"),
        (status = 404, description = "No active photo")
    ),
    tag = "profile-photos"
)]
#[get("/api/profile-photo/active")]
pub async fn active_photo_handler(data: web::Data<AppState>) -> impl Responder {
    match data.profile_photo_use_case.view_active_photo().await {
        Ok(file) => photo_response(file, ACTIVE_CACHE_CONTROL),
        Err(err) => map_photo_error(err),
    }
}

#[utoipa::path(
    get,
    path = "/api/profile-photo/info",
    responses(
        (status = 200, description = "Availability metadata for the active photo")
    ),
    tag = "profile-photos"
)]
#[get("/api/profile-photo/info")]
pub async fn photo_info_handler(data: web::Data<AppState>) -> impl Responder {
    match data.profile_photo_use_case.photo_info().await {
        Ok(info) => ApiResponse::success(info),
        Err(err) => map_photo_error(err),
    }
}

fn photo_response(file: ProfilePhotoFile, cache_control: &str) -> HttpResponse {
    HttpResponse::Ok()
        .insert_header((header::CONTENT_TYPE, file.content_type))
        .insert_header((header::CONTENT_LENGTH, file.image_data.len()))
        .insert_header((
            header::CONTENT_DISPOSITION,
            format!("inline; filename=\"{}\"", file.file_name),
        ))
        .insert_header((header::CACHE_CONTROL, cache_control))
        .body(file.image_data)
}

fn map_multipart_error(err: MultipartReadError) -> HttpResponse {
    match err {
        MultipartReadError::MissingFile => {
            ApiResponse::bad_request("MISSING_FILE", &err.to_string())
        }
        MultipartReadError::ReadFailure(_) => ApiResponse::internal_error(),
    }
}

fn map_photo_error(err: ProfilePhotoError) -> HttpResponse {
    match err {
        ProfilePhotoError::Rejected(ref rejection) => {
            let code = match rejection {
                PhotoRejection::InvalidContentType(_) | PhotoRejection::InvalidExtension(_) => {
                    "INVALID_FILE_TYPE"
                }
                PhotoRejection::TooLarge => "FILE_TOO_LARGE",
                PhotoRejection::TooSmall => "FILE_TOO_SMALL",
                PhotoRejection::NotAnImage => "INVALID_IMAGE",
                PhotoRejection::DimensionsTooSmall => "DIMENSIONS_TOO_SMALL",
                PhotoRejection::DimensionsTooLarge => "DIMENSIONS_TOO_LARGE",
            };
            ApiResponse::bad_request(code, &err.to_string())
        }
        ProfilePhotoError::NotFound(_) => {
            ApiResponse::not_found("PHOTO_NOT_FOUND", &err.to_string())
        }
        ProfilePhotoError::NoActivePhoto => {
            ApiResponse::not_found("NO_ACTIVE_PHOTO", &err.to_string())
        }
        ProfilePhotoError::Repository(_) => ApiResponse::internal_error(),
    }
}
