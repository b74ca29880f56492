use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DatabaseTransaction, EntityTrait,
    QueryFilter, Set, TransactionTrait,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::education::ports::outgoing::{
    EducationData, EducationRecord, EducationRepository, EducationRepositoryError,
};

use super::sea_orm_entity::{ActiveModel, Column, Entity, Model};

#[derive(Debug, Clone)]
pub struct EducationRepoPostgres {
    db: Arc<DatabaseConnection>,
}

impl EducationRepoPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn period_taken(
        txn: &DatabaseTransaction,
        data: &EducationData,
        exclude: Option<Uuid>,
    ) -> Result<bool, sea_orm::DbErr> {
        let mut query = Entity::find().filter(Column::StartDate.eq(data.start_date.as_str()));

        query = match &data.end_date {
            Some(end) => query.filter(Column::EndDate.eq(end.as_str())),
            None => query.filter(Column::EndDate.is_null()),
        };

        if let Some(id) = exclude {
            query = query.filter(Column::Id.ne(id));
        }

        Ok(query.one(txn).await?.is_some())
    }
}

fn db_err(e: sea_orm::DbErr) -> EducationRepositoryError {
    EducationRepositoryError::Database(e.to_string())
}

fn to_active(id: Uuid, data: EducationData) -> ActiveModel {
    ActiveModel {
        id: Set(id),
        degree: Set(data.degree),
        field: Set(data.field),
        university: Set(data.university),
        institute: Set(data.institute),
        location: Set(data.location),
        start_date: Set(data.start_date),
        end_date: Set(data.end_date),
        currently_studying: Set(data.currently_studying),
        grade: Set(data.grade),
        education_type: Set(data.education_type),
        description: Set(data.description),
    }
}

#[async_trait]
impl EducationRepository for EducationRepoPostgres {
    async fn create(
        &self,
        data: EducationData,
    ) -> Result<EducationRecord, EducationRepositoryError> {
        let txn = self.db.begin().await.map_err(db_err)?;

        if Self::period_taken(&txn, &data, None).await.map_err(db_err)? {
            return Err(EducationRepositoryError::DuplicatePeriod);
        }

        let inserted: Model = to_active(Uuid::new_v4(), data)
            .insert(&txn)
            .await
            .map_err(db_err)?;

        txn.commit().await.map_err(db_err)?;

        Ok(inserted.to_record())
    }

    async fn update(
        &self,
        id: Uuid,
        data: EducationData,
    ) -> Result<EducationRecord, EducationRepositoryError> {
        let txn = self.db.begin().await.map_err(db_err)?;

        let existing = Entity::find_by_id(id)
            .one(&txn)
            .await
            .map_err(db_err)?
            .ok_or(EducationRepositoryError::NotFound)?;

        if Self::period_taken(&txn, &data, Some(id))
            .await
            .map_err(db_err)?
        {
            return Err(EducationRepositoryError::DuplicatePeriod);
        }

        let mut active: ActiveModel = existing.into();
        let replacement = to_active(id, data);
        active.degree = replacement.degree;
        active.field = replacement.field;
        active.university = replacement.university;
        active.institute = replacement.institute;
        active.location = replacement.location;
        active.start_date = replacement.start_date;
        active.end_date = replacement.end_date;
        active.currently_studying = replacement.currently_studying;
        active.grade = replacement.grade;
        active.education_type = replacement.education_type;
        active.description = replacement.description;

        let updated: Model = active.update(&txn).await.map_err(db_err)?;

        txn.commit().await.map_err(db_err)?;

        Ok(updated.to_record())
    }

    async fn delete(&self, id: Uuid) -> Result<(), EducationRepositoryError> {
        let result = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(db_err)?;

        if result.rows_affected == 0 {
            return Err(EducationRepositoryError::NotFound);
        }

        Ok(())
    }

    async fn find_by_id(
        &self,
        id: Uuid,
    ) -> Result<Option<EducationRecord>, EducationRepositoryError> {
        let found = Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(db_err)?;

        Ok(found.map(|m| m.to_record()))
    }

    async fn find_all(&self) -> Result<Vec<EducationRecord>, EducationRepositoryError> {
        let models = Entity::find().all(&*self.db).await.map_err(db_err)?;

        Ok(models.iter().map(Model::to_record).collect())
    }
}
