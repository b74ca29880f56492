use actix_web::web;
use std::sync::Arc;

use crate::award::ports::incoming::AwardUseCase;
use crate::certification::ports::incoming::CertificationUseCase;
use crate::education::ports::incoming::EducationUseCase;
use crate::experience::ports::incoming::ExperienceUseCase;
use crate::profile_photo::ports::incoming::ProfilePhotoUseCase;
use crate::project::ports::incoming::ProjectUseCase;
use crate::resume::ports::incoming::ResumeUseCase;
use crate::skill::ports::incoming::SkillUseCase;
use crate::tests::support::stubs::*;
use crate::AppState;

/// Builds an `AppState` for handler tests. Every use case defaults to
/// an inert stub, so a test only swaps in the one it exercises.
pub struct TestAppStateBuilder {
    award: Option<Arc<dyn AwardUseCase + Send + Sync>>,
    certification: Option<Arc<dyn CertificationUseCase + Send + Sync>>,
    education: Option<Arc<dyn EducationUseCase + Send + Sync>>,
    experience: Option<Arc<dyn ExperienceUseCase + Send + Sync>>,
    project: Option<Arc<dyn ProjectUseCase + Send + Sync>>,
    skill: Option<Arc<dyn SkillUseCase + Send + Sync>>,
    resume: Option<Arc<dyn ResumeUseCase + Send + Sync>>,
    profile_photo: Option<Arc<dyn ProfilePhotoUseCase + Send + Sync>>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            award: Some(Arc::new(StubAwardUseCase)),
            certification: Some(Arc::new(StubCertificationUseCase)),
            education: Some(Arc::new(StubEducationUseCase)),
            experience: Some(Arc::new(StubExperienceUseCase)),
            project: Some(Arc::new(StubProjectUseCase)),
            skill: Some(Arc::new(StubSkillUseCase)),
            resume: Some(Arc::new(StubResumeUseCase)),
            profile_photo: Some(Arc::new(StubProfilePhotoUseCase)),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_award(mut self, uc: Arc<dyn AwardUseCase + Send + Sync>) -> Self {
        self.award = Some(uc);
        self
    }

    pub fn with_certification(mut self, uc: Arc<dyn CertificationUseCase + Send + Sync>) -> Self {
        self.certification = Some(uc);
        self
    }

    pub fn with_education(mut self, uc: Arc<dyn EducationUseCase + Send + Sync>) -> Self {
        self.education = Some(uc);
        self
    }

    pub fn with_experience(mut self, uc: Arc<dyn ExperienceUseCase + Send + Sync>) -> Self {
        self.experience = Some(uc);
        self
    }

    pub fn with_project(mut self, uc: Arc<dyn ProjectUseCase + Send + Sync>) -> Self {
        self.project = Some(uc);
        self
    }

    pub fn with_skill(mut self, uc: Arc<dyn SkillUseCase + Send + Sync>) -> Self {
        self.skill = Some(uc);
        self
    }

    pub fn with_resume(mut self, uc: Arc<dyn ResumeUseCase + Send + Sync>) -> Self {
        self.resume = Some(uc);
        self
    }

    pub fn with_profile_photo(mut self, uc: Arc<dyn ProfilePhotoUseCase + Send + Sync>) -> Self {
        self.profile_photo = Some(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            award_use_case: self.award.expect("award use case"),
            certification_use_case: self.certification.expect("certification use case"),
            education_use_case: self.education.expect("education use case"),
            experience_use_case: self.experience.expect("experience use case"),
            project_use_case: self.project.expect("project use case"),
            skill_use_case: self.skill.expect("skill use case"),
            resume_use_case: self.resume.expect("resume use case"),
            profile_photo_use_case: self.profile_photo.expect("profile photo use case"),
        })
    }
}
