use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::profile_photo::ports::outgoing::{ProfilePhotoFile, ProfilePhotoRecord};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "profile_photos")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,

    pub file_name: String,

    pub original_file_name: String,

    pub file_format: String,

    pub file_size: i64,

    pub content_type: String,

    #[sea_orm(column_type = "VarBinary(StringLen::None)")]
    pub image_data: Vec<u8>,

    pub image_width: i32,

    pub image_height: i32,

    pub uploaded_date: DateTime<Utc>,

    pub is_active: bool,
}

impl Model {
    pub fn to_record(&self) -> ProfilePhotoRecord {
        ProfilePhotoRecord {
            id: self.id,
            file_name: self.file_name.clone(),
            original_file_name: self.original_file_name.clone(),
            file_format: self.file_format.clone(),
            file_size: self.file_size,
            content_type: self.content_type.clone(),
            image_width: self.image_width,
            image_height: self.image_height,
            uploaded_date: self.uploaded_date,
            is_active: self.is_active,
        }
    }

    pub fn into_file(self) -> ProfilePhotoFile {
        ProfilePhotoFile {
            file_name: self.file_name,
            content_type: self.content_type,
            image_data: self.image_data,
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
