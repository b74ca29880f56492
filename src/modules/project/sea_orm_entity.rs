use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::project::ports::outgoing::ProjectRecord;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "projects")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,

    pub title: String,

    pub description: String,

    pub tech_stack: Option<String>,

    pub github_link: Option<String>,

    pub live_demo_link: Option<String>,
}

impl Model {
    pub fn to_record(&self) -> ProjectRecord {
        ProjectRecord {
            id: self.id,
            title: self.title.clone(),
            description: self.description.clone(),
            tech_stack: self.tech_stack.clone(),
            github_link: self.github_link.clone(),
            live_demo_link: self.live_demo_link.clone(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
