use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DatabaseTransaction, EntityTrait,
    QueryFilter, Set, TransactionTrait,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::experience::domain;
use crate::experience::ports::outgoing::{
    ExperienceData, ExperienceRecord, ExperienceRepository, ExperienceRepositoryError,
};

use super::sea_orm_entity::{ActiveModel, Column, Entity, Model, SkillTags};

#[derive(Debug, Clone)]
pub struct ExperienceRepoPostgres {
    db: Arc<DatabaseConnection>,
}

impl ExperienceRepoPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Scans every other row for an inclusive-interval collision. The whole
    /// timeline fits in one query; there is no pagination to worry about.
    async fn has_overlap(
        txn: &DatabaseTransaction,
        data: &ExperienceData,
        exclude: Option<Uuid>,
        today: NaiveDate,
    ) -> Result<bool, sea_orm::DbErr> {
        let mut query = Entity::find();
        if let Some(id) = exclude {
            query = query.filter(Column::Id.ne(id));
        }
        let others = query.all(txn).await?;

        let candidate_end = domain::effective_end(data.end_date, data.current, today);

        Ok(others.iter().any(|other| {
            let other_end = domain::effective_end(other.end_date, other.is_current, today);
            domain::overlaps(data.start_date, candidate_end, other.start_date, other_end)
        }))
    }
}

fn db_err(e: sea_orm::DbErr) -> ExperienceRepositoryError {
    ExperienceRepositoryError::Database(e.to_string())
}

#[async_trait]
impl ExperienceRepository for ExperienceRepoPostgres {
    async fn create(
        &self,
        data: ExperienceData,
    ) -> Result<ExperienceRecord, ExperienceRepositoryError> {
        let today = Utc::now().date_naive();
        let txn = self.db.begin().await.map_err(db_err)?;

        if Self::has_overlap(&txn, &data, None, today)
            .await
            .map_err(db_err)?
        {
            txn.rollback().await.map_err(db_err)?;
            return Err(ExperienceRepositoryError::Overlap);
        }

        let active = ActiveModel {
            id: Set(Uuid::new_v4()),
            company_name: Set(data.company_name),
            role: Set(data.role),
            start_date: Set(data.start_date),
            end_date: Set(data.end_date),
            is_current: Set(data.current),
            description: Set(data.description),
            skills: Set(SkillTags(data.skills)),
        };

        let inserted: Model = active.insert(&txn).await.map_err(db_err)?;
        txn.commit().await.map_err(db_err)?;

        Ok(inserted.to_record())
    }

    async fn update(
        &self,
        id: Uuid,
        data: ExperienceData,
    ) -> Result<ExperienceRecord, ExperienceRepositoryError> {
        let today = Utc::now().date_naive();
        let txn = self.db.begin().await.map_err(db_err)?;

        let existing = Entity::find_by_id(id)
            .one(&txn)
            .await
            .map_err(db_err)?
            .ok_or(ExperienceRepositoryError::NotFound)?;

        if Self::has_overlap(&txn, &data, Some(id), today)
            .await
            .map_err(db_err)?
        {
            txn.rollback().await.map_err(db_err)?;
            return Err(ExperienceRepositoryError::Overlap);
        }

        let mut active: ActiveModel = existing.into();
        active.company_name = Set(data.company_name);
        active.role = Set(data.role);
        active.start_date = Set(data.start_date);
        active.end_date = Set(data.end_date);
        active.is_current = Set(data.current);
        active.description = Set(data.description);
        active.skills = Set(SkillTags(data.skills));

        let updated: Model = active.update(&txn).await.map_err(db_err)?;
        txn.commit().await.map_err(db_err)?;

        Ok(updated.to_record())
    }

    async fn delete(&self, id: Uuid) -> Result<(), ExperienceRepositoryError> {
        let result = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(db_err)?;

        if result.rows_affected == 0 {
            return Err(ExperienceRepositoryError::NotFound);
        }

        Ok(())
    }

    async fn find_by_id(
        &self,
        id: Uuid,
    ) -> Result<Option<ExperienceRecord>, ExperienceRepositoryError> {
        let found = Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(db_err)?;

        Ok(found.map(|m| m.to_record()))
    }

    async fn find_all(&self) -> Result<Vec<ExperienceRecord>, ExperienceRepositoryError> {
        let models = Entity::find().all(&*self.db).await.map_err(db_err)?;

        Ok(models.iter().map(Model::to_record).collect())
    }
}
