pub mod award;
pub mod certification;
pub mod education;
pub mod experience;
pub mod profile_photo;
pub mod project;
pub mod resume;
pub mod skill;
