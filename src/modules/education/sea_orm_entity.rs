use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::education::ports::outgoing::EducationRecord;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "educations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,

    pub degree: String,

    pub field: String,

    pub university: String,

    pub institute: String,

    pub location: Option<String>,

    pub start_date: String,

    pub end_date: Option<String>,

    pub currently_studying: bool,

    pub grade: String,

    pub education_type: String,

    pub description: Option<String>,
}

impl Model {
    pub fn to_record(&self) -> EducationRecord {
        EducationRecord {
            id: self.id,
            degree: self.degree.clone(),
            field: self.field.clone(),
            university: self.university.clone(),
            institute: self.institute.clone(),
            location: self.location.clone(),
            start_date: self.start_date.clone(),
            end_date: self.end_date.clone(),
            currently_studying: self.currently_studying,
            grade: self.grade.clone(),
            education_type: self.education_type.clone(),
            description: self.description.clone(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
