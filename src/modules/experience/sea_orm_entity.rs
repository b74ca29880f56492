use chrono::NaiveDate;
use sea_orm::entity::prelude::*;
use sea_orm::FromJsonQueryResult;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::experience::ports::outgoing::ExperienceRecord;

/// Skill tags stored as a jsonb array.
#[derive(
    Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult,
)]
pub struct SkillTags(pub Vec<String>);

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "experiences")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,

    pub company_name: String,

    pub role: String,

    pub start_date: NaiveDate,

    pub end_date: Option<NaiveDate>,

    pub is_current: bool,

    pub description: Option<String>,

    #[sea_orm(column_type = "JsonBinary")]
    pub skills: SkillTags,
}

impl Model {
    pub fn to_record(&self) -> ExperienceRecord {
        ExperienceRecord {
            id: self.id,
            company_name: self.company_name.clone(),
            role: self.role.clone(),
            start_date: self.start_date,
            end_date: self.end_date,
            current: self.is_current,
            description: self.description.clone(),
            skills: self.skills.0.clone(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
