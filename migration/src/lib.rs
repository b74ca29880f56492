pub use sea_orm_migration::prelude::*;

mod m20250810_100001_create_table_awards;
mod m20250810_100002_create_table_certifications;
mod m20250810_100003_create_table_educations;
mod m20250810_100004_create_table_experiences;
mod m20250810_100005_create_table_projects;
mod m20250810_100006_create_table_skills;
mod m20250810_100007_create_table_resumes;
mod m20250810_100008_create_table_profile_photos;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250810_100001_create_table_awards::Migration),
            Box::new(m20250810_100002_create_table_certifications::Migration),
            Box::new(m20250810_100003_create_table_educations::Migration),
            Box::new(m20250810_100004_create_table_experiences::Migration),
            Box::new(m20250810_100005_create_table_projects::Migration),
            Box::new(m20250810_100006_create_table_skills::Migration),
            Box::new(m20250810_100007_create_table_resumes::Migration),
            Box::new(m20250810_100008_create_table_profile_photos::Migration),
        ]
    }
}
