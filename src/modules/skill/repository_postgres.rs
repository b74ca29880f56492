use async_trait::async_trait;
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
    TransactionTrait,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::skill::ports::outgoing::{
    SkillData, SkillRecord, SkillRepository, SkillRepositoryError,
};

use super::sea_orm_entity::{ActiveModel, Column, Entity, Model};

#[derive(Debug, Clone)]
pub struct SkillRepoPostgres {
    db: Arc<DatabaseConnection>,
}

impl SkillRepoPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn db_err(e: sea_orm::DbErr) -> SkillRepositoryError {
    SkillRepositoryError::Database(e.to_string())
}

fn name_matches(name: &str) -> sea_orm::sea_query::SimpleExpr {
    Expr::expr(Func::lower(Expr::col(Column::Name))).eq(name.to_lowercase())
}

#[async_trait]
impl SkillRepository for SkillRepoPostgres {
    async fn create(&self, data: SkillData) -> Result<SkillRecord, SkillRepositoryError> {
        // Duplicate check and insert share one transaction so two
        // concurrent creates cannot both pass the scan.
        let txn = self.db.begin().await.map_err(db_err)?;

        let duplicate = Entity::find()
            .filter(name_matches(&data.name))
            .one(&txn)
            .await
            .map_err(db_err)?;

        if duplicate.is_some() {
            txn.rollback().await.map_err(db_err)?;
            return Err(SkillRepositoryError::DuplicateName);
        }

        let active = ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(data.name),
            category: Set(data.category),
            proficiency: Set(data.proficiency),
        };

        let inserted: Model = active.insert(&txn).await.map_err(db_err)?;
        txn.commit().await.map_err(db_err)?;

        Ok(inserted.to_record())
    }

    async fn update(
        &self,
        id: Uuid,
        data: SkillData,
    ) -> Result<SkillRecord, SkillRepositoryError> {
        let txn = self.db.begin().await.map_err(db_err)?;

        let existing = Entity::find_by_id(id)
            .one(&txn)
            .await
            .map_err(db_err)?
            .ok_or(SkillRepositoryError::NotFound)?;

        let duplicate = Entity::find()
            .filter(name_matches(&data.name))
            .filter(Column::Id.ne(id))
            .one(&txn)
            .await
            .map_err(db_err)?;

        if duplicate.is_some() {
            txn.rollback().await.map_err(db_err)?;
            return Err(SkillRepositoryError::DuplicateName);
        }

        let mut active: ActiveModel = existing.into();
        active.name = Set(data.name);
        active.category = Set(data.category);
        active.proficiency = Set(data.proficiency);

        let updated: Model = active.update(&txn).await.map_err(db_err)?;
        txn.commit().await.map_err(db_err)?;

        Ok(updated.to_record())
    }

    async fn delete(&self, id: Uuid) -> Result<(), SkillRepositoryError> {
        let result = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(db_err)?;

        if result.rows_affected == 0 {
            return Err(SkillRepositoryError::NotFound);
        }

        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<SkillRecord>, SkillRepositoryError> {
        let found = Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(db_err)?;

        Ok(found.map(|m| m.to_record()))
    }

    async fn find_all(&self) -> Result<Vec<SkillRecord>, SkillRepositoryError> {
        let models = Entity::find().all(&*self.db).await.map_err(db_err)?;

        Ok(models.iter().map(Model::to_record).collect())
    }
}
