use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::award::ports::outgoing::AwardRecord;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "awards")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,

    pub award_name: String,

    pub description: String,

    pub award_company_name: String,

    pub award_link: Option<String>,

    pub award_year: Option<String>,
}

impl Model {
    pub fn to_record(&self) -> AwardRecord {
        AwardRecord {
            id: self.id,
            award_name: self.award_name.clone(),
            description: self.description.clone(),
            award_company_name: self.award_company_name.clone(),
            award_link: self.award_link.clone(),
            award_year: self.award_year.clone(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
