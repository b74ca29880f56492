use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::certification::ports::outgoing::CertificationRecord;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "certifications")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,

    pub title: String,

    pub description: String,

    pub month_year: String,

    pub certification_link: Option<String>,
}

impl Model {
    pub fn to_record(&self) -> CertificationRecord {
        CertificationRecord {
            id: self.id,
            title: self.title.clone(),
            description: self.description.clone(),
            month_year: self.month_year.clone(),
            certification_link: self.certification_link.clone(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
