use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    Set, TransactionTrait,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::profile_photo::ports::outgoing::{
    ProfilePhotoData, ProfilePhotoFile, ProfilePhotoRecord, ProfilePhotoRepository,
    ProfilePhotoRepositoryError,
};

use super::sea_orm_entity::{ActiveModel, Column, Entity, Model};

#[derive(Debug, Clone)]
pub struct ProfilePhotoRepoPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProfilePhotoRepoPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn db_err(e: sea_orm::DbErr) -> ProfilePhotoRepositoryError {
    ProfilePhotoRepositoryError::Database(e.to_string())
}

#[async_trait]
impl ProfilePhotoRepository for ProfilePhotoRepoPostgres {
    async fn insert_active(
        &self,
        data: ProfilePhotoData,
    ) -> Result<ProfilePhotoRecord, ProfilePhotoRepositoryError> {
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
            image_data: Set(data.image_data),
            image_width: Set(data.image_width),
            image_height: Set(data.image_height),
            uploaded_date: Set(data.uploaded_date),
            is_active: Set(true),
        };

        let inserted: Model = active.insert(&txn).await.map_err(db_err)?;
        txn.commit().await.map_err(db_err)?;

        Ok(inserted.to_record())
    }

    async fn activate(
        &self,
        id: Uuid,
    ) -> Result<ProfilePhotoRecord, ProfilePhotoRepositoryError> {
        let txn = self.db.begin().await.map_err(db_err)?;

        let existing = Entity::find_by_id(id)
            .one(&txn)
            .await
            .map_err(db_err)?
            .ok_or(ProfilePhotoRepositoryError::NotFound)?;

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

    async fn delete(&self, id: Uuid) -> Result<(), ProfilePhotoRepositoryError> {
        let result = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(db_err)?;

        if result.rows_affected == 0 {
            return Err(ProfilePhotoRepositoryError::NotFound);
        }

        Ok(())
    }

    async fn find_all_meta(
        &self,
    ) -> Result<Vec<ProfilePhotoRecord>, ProfilePhotoRepositoryError> {
        let models = Entity::find()
            .order_by_desc(Column::UploadedDate)
            .all(&*self.db)
            .await
            .map_err(db_err)?;

        Ok(models.iter().map(Model::to_record).collect())
    }

    async fn find_active_meta(
        &self,
    ) -> Result<Option<ProfilePhotoRecord>, ProfilePhotoRepositoryError> {
        let found = Entity::find()
            .filter(Column::IsActive.eq(true))
            .one(&*self.db)
            .await
            .map_err(db_err)?;

        Ok(found.map(|m| m.to_record()))
    }

    async fn find_active_file(
        &self,
    ) -> Result<Option<ProfilePhotoFile>, ProfilePhotoRepositoryError> {
        let found = Entity::find()
            .filter(Column::IsActive.eq(true))
            .one(&*self.db)
            .await
            .map_err(db_err)?;

        Ok(found.map(Model::into_file))
    }

    async fn find_file(
        &self,
        id: Uuid,
    ) -> Result<Option<ProfilePhotoFile>, ProfilePhotoRepositoryError> {
        let found = Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(db_err)?;

        Ok(found.map(Model::into_file))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn photo_model(id: Uuid, active: bool) -> Model {
        Model {
            id,
            file_name: "profile_me_1700000000000_a1b2c3d4.png".to_string(),
            original_file_name: "me.png".to_string(),
            file_format: "PNG".to_string(),
            file_size: 2048,
            content_type: "image/png".to_string(),
            image_data: vec![0u8; 16],
            image_width: 640,
            image_height: 480,
            uploaded_date: Utc::now(),
            is_active: active,
        }
    }

    #[tokio::test]
    async fn activate_missing_row_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<Model>::new()])
            .into_connection();

        let repo = ProfilePhotoRepoPostgres::new(Arc::new(db));

        let result = repo.activate(Uuid::new_v4()).await;

        assert!(matches!(
            result,
            Err(ProfilePhotoRepositoryError::NotFound)
        ));
    }

    #[tokio::test]
    async fn activate_marks_target_active() {
        let id = Uuid::new_v4();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![
                vec![photo_model(id, false)],
                vec![photo_model(id, true)],
            ])
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 3,
            }])
            .into_connection();

        let repo = ProfilePhotoRepoPostgres::new(Arc::new(db));

        let record = repo.activate(id).await.expect("expected activate");

        assert!(record.is_active);
        assert_eq!(record.image_width, 640);
    }

    #[tokio::test]
    async fn find_file_returns_payload() {
        let id = Uuid::new_v4();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![photo_model(id, true)]])
            .into_connection();

        let repo = ProfilePhotoRepoPostgres::new(Arc::new(db));

        let file = repo
            .find_file(id)
            .await
            .expect("query failed")
            .expect("expected a file");

        assert_eq!(file.content_type, "image/png");
        assert_eq!(file.image_data.len(), 16);
    }
}
