pub mod api;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::award;
pub use modules::certification;
pub use modules::education;
pub use modules::experience;
pub use modules::profile_photo;
pub use modules::project;
pub use modules::resume;
pub use modules::skill;

use crate::award::ports::incoming::AwardUseCase;
use crate::award::repository_postgres::AwardRepoPostgres;
use crate::award::services::AwardService;
use crate::certification::ports::incoming::CertificationUseCase;
use crate::certification::repository_postgres::CertificationRepoPostgres;
use crate::certification::services::CertificationService;
use crate::education::ports::incoming::EducationUseCase;
use crate::education::repository_postgres::EducationRepoPostgres;
use crate::education::services::EducationService;
use crate::experience::ports::incoming::ExperienceUseCase;
use crate::experience::repository_postgres::ExperienceRepoPostgres;
use crate::experience::services::ExperienceService;
use crate::profile_photo::ports::incoming::ProfilePhotoUseCase;
use crate::profile_photo::repository_postgres::ProfilePhotoRepoPostgres;
use crate::profile_photo::services::ProfilePhotoService;
use crate::project::ports::incoming::ProjectUseCase;
use crate::project::repository_postgres::ProjectRepoPostgres;
use crate::project::services::ProjectService;
use crate::resume::ports::incoming::ResumeUseCase;
use crate::resume::repository_postgres::ResumeRepoPostgres;
use crate::resume::services::ResumeService;
use crate::shared::api::json_config::custom_json_config;
use crate::shared::auth::AdminTokenPolicy;
use crate::skill::ports::incoming::SkillUseCase;
use crate::skill::repository_postgres::SkillRepoPostgres;
use crate::skill::services::SkillService;

use actix_web::{web, App, HttpServer};
use sea_orm::{ConnectOptions, Database};
use std::env;
use std::sync::Arc;
use std::time::Duration;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub award_use_case: Arc<dyn AwardUseCase + Send + Sync>,
    pub certification_use_case: Arc<dyn CertificationUseCase + Send + Sync>,
    pub education_use_case: Arc<dyn EducationUseCase + Send + Sync>,
    pub experience_use_case: Arc<dyn ExperienceUseCase + Send + Sync>,
    pub project_use_case: Arc<dyn ProjectUseCase + Send + Sync>,
    pub skill_use_case: Arc<dyn SkillUseCase + Send + Sync>,
    pub resume_use_case: Arc<dyn ResumeUseCase + Send + Sync>,
    pub profile_photo_use_case: Arc<dyn ProfilePhotoUseCase + Send + Sync>,
}

#[actix_web::main]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    let env_name = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env_name);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let db_url = env::var("DATABASE_URL").expect("DATABASE_URL is not set in .env file");
    let host = env::var("HOST").expect("HOST is not set in .env file");
    let port = env::var("PORT").expect("PORT is not set in .env file");

    let admin_token_policy = AdminTokenPolicy::from_env();

    let server_url = format!("{host}:{port}");
    info!("Server run on: {}", server_url);

    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(50)
        .min_connections(10)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .expect("Failed to connect to database");

    let db_arc = Arc::new(conn);

    let award_service = AwardService::new(AwardRepoPostgres::new(Arc::clone(&db_arc)));
    let certification_service =
        CertificationService::new(CertificationRepoPostgres::new(Arc::clone(&db_arc)));
    let education_service =
        EducationService::new(EducationRepoPostgres::new(Arc::clone(&db_arc)));
    let experience_service =
        ExperienceService::new(ExperienceRepoPostgres::new(Arc::clone(&db_arc)));
    let project_service = ProjectService::new(ProjectRepoPostgres::new(Arc::clone(&db_arc)));
    let skill_service = SkillService::new(SkillRepoPostgres::new(Arc::clone(&db_arc)));
    let resume_service = ResumeService::new(ResumeRepoPostgres::new(Arc::clone(&db_arc)));
    let profile_photo_service =
        ProfilePhotoService::new(ProfilePhotoRepoPostgres::new(Arc::clone(&db_arc)));

    let state = AppState {
        award_use_case: Arc::new(award_service),
        certification_use_case: Arc::new(certification_service),
        education_use_case: Arc::new(education_service),
        experience_use_case: Arc::new(experience_service),
        project_use_case: Arc::new(project_service),
        skill_use_case: Arc::new(skill_service),
        resume_use_case: Arc::new(resume_service),
        profile_photo_use_case: Arc::new(profile_photo_service),
    };

    let db_for_server = Arc::clone(&db_arc);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(admin_token_policy.clone()))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(custom_json_config())
            .configure(init_routes)
            .service(
                SwaggerUi::new("/docs/{_:.*}")
                    .url("/api-docs/openapi.json", api::openapi::ApiDoc::openapi()),
            )
    })
    .bind(server_url)?
    .run()
    .await
}

fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Awards
    cfg.service(crate::award::routes::get_awards_handler);
    cfg.service(crate::award::routes::create_award_handler);
    cfg.service(crate::award::routes::update_award_handler);
    cfg.service(crate::award::routes::delete_award_handler);
    // Certifications
    cfg.service(crate::certification::routes::get_certifications_handler);
    cfg.service(crate::certification::routes::create_certification_handler);
    cfg.service(crate::certification::routes::update_certification_handler);
    cfg.service(crate::certification::routes::delete_certification_handler);
    // Educations
    cfg.service(crate::education::routes::get_educations_handler);
    cfg.service(crate::education::routes::create_education_handler);
    cfg.service(crate::education::routes::update_education_handler);
    cfg.service(crate::education::routes::delete_education_handler);
    // Experiences
    cfg.service(crate::experience::routes::get_experiences_handler);
    cfg.service(crate::experience::routes::create_experience_handler);
    cfg.service(crate::experience::routes::update_experience_handler);
    cfg.service(crate::experience::routes::delete_experience_handler);
    // Projects
    cfg.service(crate::project::routes::get_projects_handler);
    cfg.service(crate::project::routes::create_project_handler);
    cfg.service(crate::project::routes::update_project_handler);
    cfg.service(crate::project::routes::delete_project_handler);
    // Skills
    cfg.service(crate::skill::routes::get_skills_handler);
    cfg.service(crate::skill::routes::create_skill_handler);
    cfg.service(crate::skill::routes::update_skill_handler);
    cfg.service(crate::skill::routes::delete_skill_handler);
    // Resumes
    cfg.service(crate::resume::routes::upload_resume_handler);
    cfg.service(crate::resume::routes::get_resumes_handler);
    cfg.service(crate::resume::routes::activate_resume_handler);
    cfg.service(crate::resume::routes::delete_resume_handler);
    cfg.service(crate::resume::routes::download_resume_handler);
    cfg.service(crate::resume::routes::preview_resume_handler);
    cfg.service(crate::resume::routes::resume_download_info_handler);
    // Profile photos
    cfg.service(crate::profile_photo::routes::upload_photo_handler);
    cfg.service(crate::profile_photo::routes::get_photos_handler);
    cfg.service(crate::profile_photo::routes::activate_photo_handler);
    cfg.service(crate::profile_photo::routes::delete_photo_handler);
    cfg.service(crate::profile_photo::routes::view_photo_handler);
    cfg.service(crate::profile_photo::routes::active_photo_handler);
    cfg.service(crate::profile_photo::routes::photo_info_handler);
}

fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
