use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    Set, TransactionTrait,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::resume::ports::outgoing::{
    ResumeData, ResumeFile, ResumeRecord, ResumeRepository, ResumeRepositoryError,
};

use super::sea_orm_entity::{ActiveModel, Column, Entity, Model};

#[derive(Debug, Clone)]
pub struct ResumeRepoPostgres {
    db: Arc<DatabaseConnection>,
}

impl ResumeRepoPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn db_err(e: sea_orm::DbErr) -> ResumeRepositoryError {
    ResumeRepositoryError::Database(e.to_string())
}

#[async_trait]
impl ResumeRepository for ResumeRepoPostgres {
    async fn insert_active(&self, data: ResumeData) -> Result<ResumeRecord, ResumeRepositoryError> {
        // Deactivate-all and insert share one transaction to hold the
        // single-active invariant under concurrent uploads.
        let txn = self.db.begin().await.map_err(db_err)?;

        Entity::update_many()
            .col_expr(Column::IsActive, Expr::value(false))
            .exec(&txn)
            .await
            .map_err(db_err)?;

        let active = ActiveModel {
            id: Set(Uuid::new_v4()),
            file_name: Set(data.file_name),
            original_file_name: Set(data.original_file_name),
            file_format: Set(data.file_format),
            file_size: Set(data.file_size),
            content_type: Set(data.content_type),
            file_data: Set(data.file_data),
            uploaded_date: Set(data.uploaded_date),
            is_active: Set(true),
        };

        let inserted: Model = active.insert(&txn).await.map_err(db_err)?;
        txn.commit().await.map_err(db_err)?;

        Ok(inserted.to_record())
    }

    async fn activate(&self, id: Uuid) -> Result<ResumeRecord, ResumeRepositoryError> {
        let txn = self.db.begin().await.map_err(db_err)?;

        let existing = Entity::find_by_id(id)
            .one(&txn)
            .await
            .map_err(db_err)?
            .ok_or(ResumeRepositoryError::NotFound)?;

        Entity::update_many()
            .col_expr(Column::IsActive, Expr::value(false))
            .exec(&txn)
            .await
            .map_err(db_err)?;

        let mut active: ActiveModel = existing.into();
        active.is_active = Set(true);

        let updated: Model = active.update(&txn).await.map_err(db_err)?;
        txn.commit().await.map_err(db_err)?;

        Ok(updated.to_record())
    }

    async fn delete(&self, id: Uuid) -> Result<(), ResumeRepositoryError> {
        let result = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(db_err)?;

        if result.rows_affected == 0 {
            return Err(ResumeRepositoryError::NotFound);
        }

        Ok(())
    }

    async fn find_all_meta(&self) -> Result<Vec<ResumeRecord>, ResumeRepositoryError> {
        let models = Entity::find()
            .order_by_desc(Column::UploadedDate)
            .all(&*self.db)
            .await
            .map_err(db_err)?;

        Ok(models.iter().map(Model::to_record).collect())
    }

    async fn find_active_meta(&self) -> Result<Option<ResumeRecord>, ResumeRepositoryError> {
        let found = Entity::find()
            .filter(Column::IsActive.eq(true))
            .one(&*self.db)
            .await
            .map_err(db_err)?;

        Ok(found.map(|m| m.to_record()))
    }

    async fn find_active_file(&self) -> Result<Option<ResumeFile>, ResumeRepositoryError> {
        let found = Entity::find()
            .filter(Column::IsActive.eq(true))
            .one(&*self.db)
            .await
            .map_err(db_err)?;

        Ok(found.map(Model::into_file))
    }

    async fn find_file(&self, id: Uuid) -> Result<Option<ResumeFile>, ResumeRepositoryError> {
        let found = Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(db_err)?;

        Ok(found.map(Model::into_file))
    }
}
