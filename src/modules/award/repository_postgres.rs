use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::award::ports::outgoing::{
    AwardData, AwardRecord, AwardRepository, AwardRepositoryError,
};

use super::sea_orm_entity::{ActiveModel, Entity, Model};

#[derive(Debug, Clone)]
pub struct AwardRepoPostgres {
    db: Arc<DatabaseConnection>,
}

impl AwardRepoPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn db_err(e: sea_orm::DbErr) -> AwardRepositoryError {
    AwardRepositoryError::Database(e.to_string())
}

#[async_trait]
impl AwardRepository for AwardRepoPostgres {
    async fn create(&self, data: AwardData) -> Result<AwardRecord, AwardRepositoryError> {
        let active = ActiveModel {
            id: Set(Uuid::new_v4()),
            award_name: Set(data.award_name),
            description: Set(data.description),
            award_company_name: Set(data.award_company_name),
            award_link: Set(data.award_link),
            award_year: Set(data.award_year),
        };

        let inserted: Model = active.insert(&*self.db).await.map_err(db_err)?;

        Ok(inserted.to_record())
    }

    async fn update(
        &self,
        id: Uuid,
        data: AwardData,
    ) -> Result<AwardRecord, AwardRepositoryError> {
        let existing = Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(db_err)?
            .ok_or(AwardRepositoryError::NotFound)?;

        let mut active: ActiveModel = existing.into();
        active.award_name = Set(data.award_name);
        active.description = Set(data.description);
        active.award_company_name = Set(data.award_company_name);
        active.award_link = Set(data.award_link);
        active.award_year = Set(data.award_year);

        let updated: Model = active.update(&*self.db).await.map_err(db_err)?;

        Ok(updated.to_record())
    }

    async fn delete(&self, id: Uuid) -> Result<(), AwardRepositoryError> {
        let result = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(db_err)?;

        if result.rows_affected == 0 {
            return Err(AwardRepositoryError::NotFound);
        }

        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<AwardRecord>, AwardRepositoryError> {
        let found = Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(db_err)?;

        Ok(found.map(|m| m.to_record()))
    }

    async fn find_all(&self) -> Result<Vec<AwardRecord>, AwardRepositoryError> {
        let models = Entity::find().all(&*self.db).await.map_err(db_err)?;

        Ok(models.iter().map(Model::to_record).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn award_model(id: Uuid) -> Model {
        Model {
            id,
            award_name: "Best Hack".to_string(),
            description: "First place overall".to_string(),
            award_company_name: "HackCon".to_string(),
            award_link: None,
            award_year: Some("2024".to_string()),
        }
    }

    #[tokio::test]
    async fn create_returns_inserted_record() {
        let id = Uuid::new_v4();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![award_model(id)]])
            .into_connection();

        let repo = AwardRepoPostgres::new(Arc::new(db));

        let record = repo
            .create(AwardData {
                award_name: "Best Hack".into(),
                description: "First place overall".into(),
                award_company_name: "HackCon".into(),
                award_link: None,
                award_year: Some("2024".into()),
            })
            .await
            .expect("expected insert to succeed");

        assert_eq!(record.id, id);
        assert_eq!(record.award_year.as_deref(), Some("2024"));
    }

    #[tokio::test]
    async fn delete_missing_row_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let repo = AwardRepoPostgres::new(Arc::new(db));

        let result = repo.delete(Uuid::new_v4()).await;

        assert!(matches!(result, Err(AwardRepositoryError::NotFound)));
    }
}
