use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use std::future::{ready, Ready};

use crate::shared::api::ApiResponse;

pub const ADMIN_TOKEN_HEADER: &str = "X-ADMIN-TOKEN";

/// The single shared admin token all mutating endpoints are checked against.
///
/// Token storage/rotation is out of scope; the value comes from the
/// environment at startup and never reaches business logic.
#[derive(Debug, Clone)]
pub struct AdminTokenPolicy {
    token: String,
}

impl AdminTokenPolicy {
    pub fn new(token: String) -> Self {
        Self { token }
    }

    pub fn from_env() -> Self {
        let token = std::env::var("ADMIN_TOKEN").expect("ADMIN_TOKEN is not set in .env file");
        Self { token }
    }

    pub fn matches(&self, candidate: &str) -> bool {
        self.token == candidate
    }
}

/// Extractor proving the request carried a valid `X-ADMIN-TOKEN` header.
#[derive(Debug, Clone)]
pub struct AdminGuard;

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

impl FromRequest for AdminGuard {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let policy = match req.app_data::<web::Data<AdminTokenPolicy>>() {
            Some(policy) => policy,
            None => {
                return ready(Err(create_api_error(ApiResponse::internal_error())));
            }
        };

        let candidate = req
            .headers()
            .get(ADMIN_TOKEN_HEADER)
            .and_then(|value| value.to_str().ok());

        match candidate {
            Some(token) if policy.matches(token) => ready(Ok(AdminGuard)),
            Some(_) => ready(Err(create_api_error(ApiResponse::unauthorized(
                "INVALID_ADMIN_TOKEN",
                "Invalid admin token",
            )))),
            None => ready(Err(create_api_error(ApiResponse::unauthorized(
                "MISSING_ADMIN_TOKEN",
                "Missing admin token header",
            )))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, post, test, App, Responder};

    #[post("/guarded")]
    async fn guarded_handler(_admin: AdminGuard) -> impl Responder {
        ApiResponse::success("ok")
    }

    fn policy() -> web::Data<AdminTokenPolicy> {
        web::Data::new(AdminTokenPolicy::new("secret-token".to_string()))
    }

    #[actix_web::test]
    async fn request_with_matching_token_passes() {
        let app =
            test::init_service(App::new().app_data(policy()).service(guarded_handler)).await;

        let req = test::TestRequest::post()
            .uri("/guarded")
            .insert_header((ADMIN_TOKEN_HEADER, "secret-token"))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn request_with_wrong_token_is_unauthorized() {
        let app =
            test::init_service(App::new().app_data(policy()).service(guarded_handler)).await;

        let req = test::TestRequest::post()
            .uri("/guarded")
            .insert_header((ADMIN_TOKEN_HEADER, "not-the-token"))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn request_without_header_is_unauthorized() {
        let app =
            test::init_service(App::new().app_data(policy()).service(guarded_handler)).await;

        let req = test::TestRequest::post().uri("/guarded").to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }
}
