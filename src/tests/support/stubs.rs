//! Inert use-case implementations for handler tests. Each stub behaves
//! like an empty system: list calls report nothing recorded, lookups by
//! id miss, and mutations fail with a repository error so a test that
//! forgot to install a real mock fails loudly instead of passing.

use async_trait::async_trait;
use uuid::Uuid;

use crate::award::ports::incoming::{AwardCommand, AwardError, AwardUseCase};
use crate::award::ports::outgoing::AwardRecord;
use crate::certification::ports::incoming::{
    CertificationCommand, CertificationError, CertificationUseCase,
};
use crate::certification::ports::outgoing::CertificationRecord;
use crate::education::ports::incoming::{EducationCommand, EducationError, EducationUseCase};
use crate::education::ports::outgoing::EducationRecord;
use crate::experience::ports::incoming::{
    ExperienceCommand, ExperienceError, ExperienceUseCase,
};
use crate::experience::ports::outgoing::ExperienceRecord;
use crate::profile_photo::ports::incoming::{
    ProfilePhotoError, ProfilePhotoInfo, ProfilePhotoUseCase,
};
use crate::profile_photo::ports::outgoing::{ProfilePhotoFile, ProfilePhotoRecord};
use crate::project::ports::incoming::{ProjectCommand, ProjectError, ProjectUseCase};
use crate::project::ports::outgoing::ProjectRecord;
use crate::resume::ports::incoming::{ResumeDownloadInfo, ResumeError, ResumeUseCase};
use crate::resume::ports::outgoing::{ResumeFile, ResumeRecord};
use crate::skill::ports::incoming::{SkillCommand, SkillError, SkillUseCase};
use crate::skill::ports::outgoing::SkillRecord;

const NOT_USED: &str = "not used in this test";

#[derive(Default, Clone)]
pub struct StubAwardUseCase;

#[async_trait]
impl AwardUseCase for StubAwardUseCase {
    async fn create_award(&self, _command: AwardCommand) -> Result<AwardRecord, AwardError> {
        Err(AwardError::Repository(NOT_USED.to_string()))
    }

    async fn update_award(
        &self,
        _id: Uuid,
        _command: AwardCommand,
    ) -> Result<AwardRecord, AwardError> {
        Err(AwardError::Repository(NOT_USED.to_string()))
    }

    async fn delete_award(&self, id: Uuid) -> Result<(), AwardError> {
        Err(AwardError::NotFound(id))
    }

    async fn get_all_awards(&self) -> Result<Vec<AwardRecord>, AwardError> {
        Err(AwardError::NoneFound)
    }
}

#[derive(Default, Clone)]
pub struct StubCertificationUseCase;

#[async_trait]
impl CertificationUseCase for StubCertificationUseCase {
    async fn create_certification(
        &self,
        _command: CertificationCommand,
    ) -> Result<CertificationRecord, CertificationError> {
        Err(CertificationError::Repository(NOT_USED.to_string()))
    }

    async fn update_certification(
        &self,
        _id: Uuid,
        _command: CertificationCommand,
    ) -> Result<CertificationRecord, CertificationError> {
        Err(CertificationError::Repository(NOT_USED.to_string()))
    }

    async fn delete_certification(&self, id: Uuid) -> Result<(), CertificationError> {
        Err(CertificationError::NotFound(id))
    }

    async fn get_all_certifications(
        &self,
    ) -> Result<Vec<CertificationRecord>, CertificationError> {
        Err(CertificationError::NoneFound)
    }
}

#[derive(Default, Clone)]
pub struct StubEducationUseCase;

#[async_trait]
impl EducationUseCase for StubEducationUseCase {
    async fn create_education(
        &self,
        _command: EducationCommand,
    ) -> Result<EducationRecord, EducationError> {
        Err(EducationError::Repository(NOT_USED.to_string()))
    }

    async fn update_education(
        &self,
        _id: Uuid,
        _command: EducationCommand,
    ) -> Result<EducationRecord, EducationError> {
        Err(EducationError::Repository(NOT_USED.to_string()))
    }

    async fn delete_education(&self, id: Uuid) -> Result<(), EducationError> {
        Err(EducationError::NotFound(id))
    }

    async fn get_all_educations(&self) -> Result<Vec<EducationRecord>, EducationError> {
        Err(EducationError::NoneFound)
    }
}

#[derive(Default, Clone)]
pub struct StubExperienceUseCase;

#[async_trait]
impl ExperienceUseCase for StubExperienceUseCase {
    async fn create_experience(
        &self,
        _command: ExperienceCommand,
    ) -> Result<ExperienceRecord, ExperienceError> {
        Err(ExperienceError::Repository(NOT_USED.to_string()))
    }

    async fn update_experience(
        &self,
        _id: Uuid,
        _command: ExperienceCommand,
    ) -> Result<ExperienceRecord, ExperienceError> {
        Err(ExperienceError::Repository(NOT_USED.to_string()))
    }

    async fn delete_experience(&self, id: Uuid) -> Result<(), ExperienceError> {
        Err(ExperienceError::NotFound(id))
    }

    async fn get_all_experiences(&self) -> Result<Vec<ExperienceRecord>, ExperienceError> {
        Err(ExperienceError::NoneFound)
    }
}

#[derive(Default, Clone)]
pub struct StubProjectUseCase;

#[async_trait]
impl ProjectUseCase for StubProjectUseCase {
    async fn create_project(
        &self,
        _command: ProjectCommand,
    ) -> Result<ProjectRecord, ProjectError> {
        Err(ProjectError::Repository(NOT_USED.to_string()))
    }

    async fn update_project(
        &self,
        _id: Uuid,
        _command: ProjectCommand,
    ) -> Result<ProjectRecord, ProjectError> {
        Err(ProjectError::Repository(NOT_USED.to_string()))
    }

    async fn delete_project(&self, id: Uuid) -> Result<(), ProjectError> {
        Err(ProjectError::NotFound(id))
    }

    async fn get_all_projects(&self) -> Result<Vec<ProjectRecord>, ProjectError> {
        Err(ProjectError::NoneFound)
    }
}

#[derive(Default, Clone)]
pub struct StubSkillUseCase;

#[async_trait]
impl SkillUseCase for StubSkillUseCase {
    async fn create_skill(&self, _command: SkillCommand) -> Result<SkillRecord, SkillError> {
        Err(SkillError::Repository(NOT_USED.to_string()))
    }

    async fn update_skill(
        &self,
        _id: Uuid,
        _command: SkillCommand,
    ) -> Result<SkillRecord, SkillError> {
        Err(SkillError::Repository(NOT_USED.to_string()))
    }

    async fn delete_skill(&self, id: Uuid) -> Result<(), SkillError> {
        Err(SkillError::NotFound(id))
    }

    async fn get_all_skills(&self) -> Result<Vec<SkillRecord>, SkillError> {
        Err(SkillError::NoneFound)
    }
}

#[derive(Default, Clone)]
pub struct StubResumeUseCase;

#[async_trait]
impl ResumeUseCase for StubResumeUseCase {
    async fn upload_resume(
        &self,
        _original_file_name: String,
        _content_type: String,
        _bytes: Vec<u8>,
    ) -> Result<ResumeRecord, ResumeError> {
        Err(ResumeError::Repository(NOT_USED.to_string()))
    }

    async fn get_all_resumes(&self) -> Result<Vec<ResumeRecord>, ResumeError> {
        Ok(vec![])
    }

    async fn activate_resume(&self, id: Uuid) -> Result<ResumeRecord, ResumeError> {
        Err(ResumeError::NotFound(id))
    }

    async fn delete_resume(&self, id: Uuid) -> Result<(), ResumeError> {
        Err(ResumeError::NotFound(id))
    }

    async fn download_active(&self) -> Result<ResumeFile, ResumeError> {
        Err(ResumeError::NoActiveResume)
    }

    async fn preview_resume(&self, id: Uuid) -> Result<ResumeFile, ResumeError> {
        Err(ResumeError::NotFound(id))
    }

    async fn download_info(&self) -> Result<ResumeDownloadInfo, ResumeError> {
        Ok(ResumeDownloadInfo {
            available: false,
            file_name: None,
            file_format: None,
            file_size: None,
            uploaded_date: None,
        })
    }
}

#[derive(Default, Clone)]
pub struct StubProfilePhotoUseCase;

#[async_trait]
impl ProfilePhotoUseCase for StubProfilePhotoUseCase {
    async fn upload_photo(
        &self,
        _original_file_name: String,
        _content_type: String,
        _bytes: Vec<u8>,
    ) -> Result<ProfilePhotoRecord, ProfilePhotoError> {
        Err(ProfilePhotoError::Repository(NOT_USED.to_string()))
    }

    async fn get_all_photos(&self) -> Result<Vec<ProfilePhotoRecord>, ProfilePhotoError> {
        Ok(vec![])
    }

    async fn activate_photo(&self, id: Uuid) -> Result<ProfilePhotoRecord, ProfilePhotoError> {
        Err(ProfilePhotoError::NotFound(id))
    }

    async fn delete_photo(&self, id: Uuid) -> Result<(), ProfilePhotoError> {
        Err(ProfilePhotoError::NotFound(id))
    }

    async fn view_photo(&self, id: Uuid) -> Result<ProfilePhotoFile, ProfilePhotoError> {
        Err(ProfilePhotoError::NotFound(id))
    }

    async fn view_active_photo(&self) -> Result<ProfilePhotoFile, ProfilePhotoError> {
        Err(ProfilePhotoError::NoActivePhoto)
    }

    async fn photo_info(&self) -> Result<ProfilePhotoInfo, ProfilePhotoError> {
        Ok(ProfilePhotoInfo {
            available: false,
            image_url: None,
            file_name: None,
            file_size: None,
            image_width: None,
            image_height: None,
            uploaded_date: None,
        })
    }
}
