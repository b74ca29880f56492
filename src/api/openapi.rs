use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::OpenApi;

use crate::profile_photo::ports::incoming::ProfilePhotoInfo;
use crate::profile_photo::ports::outgoing::ProfilePhotoRecord;
use crate::resume::ports::incoming::ResumeDownloadInfo;
use crate::resume::ports::outgoing::ResumeRecord;
use crate::shared::auth::ADMIN_TOKEN_HEADER;
use crate::skill::ports::outgoing::SkillRecord;
use crate::skill::routes::SkillRequest;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio Backend API",
        version = "1.0.0",
        description = "API documentation for the personal portfolio backend",
        contact(
            name = "API Support",
            email = "support@example.com"
        )
    ),
    paths(
        // Skill endpoints
        crate::skill::routes::get_skills_handler,
        crate::skill::routes::create_skill_handler,
        crate::skill::routes::update_skill_handler,
        crate::skill::routes::delete_skill_handler,

        // Resume endpoints
        crate::resume::routes::upload_resume_handler,
        crate::resume::routes::get_resumes_handler,
        crate::resume::routes::activate_resume_handler,
        crate::resume::routes::delete_resume_handler,
        crate::resume::routes::download_resume_handler,
        crate::resume::routes::preview_resume_handler,
        crate::resume::routes::resume_download_info_handler,

        // Profile photo endpoints
        crate::profile_photo::routes::upload_photo_handler,
        crate::profile_photo::routes::get_photos_handler,
        crate::profile_photo::routes::activate_photo_handler,
        crate::profile_photo::routes::delete_photo_handler,
        crate::profile_photo::routes::view_photo_handler,
        crate::profile_photo::routes::active_photo_handler,
        crate::profile_photo::routes::photo_info_handler,

        // Award endpoints
        // get_awards_handler,
        // create_award_handler,
        // update_award_handler,
        // delete_award_handler,

        // Certification endpoints
        // get_certifications_handler,
        // create_certification_handler,
        // update_certification_handler,
        // delete_certification_handler,

        // Education endpoints
        // get_educations_handler,
        // create_education_handler,
        // update_education_handler,
        // delete_education_handler,

        // Experience endpoints
        // get_experiences_handler,
        // create_experience_handler,
        // update_experience_handler,
        // delete_experience_handler,

        // Project endpoints
        // get_projects_handler,
        // create_project_handler,
        // update_project_handler,
        // delete_project_handler,
    ),
    components(
        schemas(
            SkillRequest,
            SkillRecord,
            ResumeRecord,
            ResumeDownloadInfo,
            ProfilePhotoRecord,
            ProfilePhotoInfo
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "skills", description = "Skill management endpoints"),
        (name = "resumes", description = "Resume upload and delivery endpoints"),
        (name = "profile-photos", description = "Profile photo upload and delivery endpoints"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "AdminToken",
                SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::with_description(
                    ADMIN_TOKEN_HEADER,
                    "Static admin token",
                ))),
            )
        }
    }
}
