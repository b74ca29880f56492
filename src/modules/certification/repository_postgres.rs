use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::certification::ports::outgoing::{
    CertificationData, CertificationRecord, CertificationRepository,
    CertificationRepositoryError,
};

use super::sea_orm_entity::{ActiveModel, Entity, Model};

#[derive(Debug, Clone)]
pub struct CertificationRepoPostgres {
    db: Arc<DatabaseConnection>,
}

impl CertificationRepoPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn db_err(e: sea_orm::DbErr) -> CertificationRepositoryError {
    CertificationRepositoryError::Database(e.to_string())
}

#[async_trait]
impl CertificationRepository for CertificationRepoPostgres {
    async fn create(
        &self,
        data: CertificationData,
    ) -> Result<CertificationRecord, CertificationRepositoryError> {
        let active = ActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(data.title),
            description: Set(data.description),
            month_year: Set(data.month_year),
            certification_link: Set(data.certification_link),
        };

        let inserted: Model = active.insert(&*self.db).await.map_err(db_err)?;

        Ok(inserted.to_record())
    }

    async fn update(
        &self,
        id: Uuid,
        data: CertificationData,
    ) -> Result<CertificationRecord, CertificationRepositoryError> {
        let existing = Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(db_err)?
            .ok_or(CertificationRepositoryError::NotFound)?;

        let mut active: ActiveModel = existing.into();
        active.title = Set(data.title);
        active.description = Set(data.description);
        active.month_year = Set(data.month_year);
        active.certification_link = Set(data.certification_link);

        let updated: Model = active.update(&*self.db).await.map_err(db_err)?;

        Ok(updated.to_record())
    }

    async fn delete(&self, id: Uuid) -> Result<(), CertificationRepositoryError> {
        let result = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(db_err)?;

        if result.rows_affected == 0 {
            return Err(CertificationRepositoryError::NotFound);
        }

        Ok(())
    }

    async fn find_by_id(
        &self,
        id: Uuid,
    ) -> Result<Option<CertificationRecord>, CertificationRepositoryError> {
        let found = Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(db_err)?;

        Ok(found.map(|m| m.to_record()))
    }

    async fn find_all(&self) -> Result<Vec<CertificationRecord>, CertificationRepositoryError> {
        let models = Entity::find().all(&*self.db).await.map_err(db_err)?;

        Ok(models.iter().map(Model::to_record).collect())
    }
}
