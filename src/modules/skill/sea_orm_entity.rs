use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::skill::ports::outgoing::SkillRecord;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "skills")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,

    pub name: String,

    pub category: Option<String>,

    pub proficiency: i32,
}

impl Model {
    pub fn to_record(&self) -> SkillRecord {
        SkillRecord {
            id: self.id,
            name: self.name.clone(),
            category: self.category.clone(),
            proficiency: self.proficiency,
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
