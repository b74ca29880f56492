use async_trait::async_trait;
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
    TransactionTrait,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::project::ports::outgoing::{
    ProjectData, ProjectRecord, ProjectRepository, ProjectRepositoryError,
};

use super::sea_orm_entity::{ActiveModel, Column, Entity, Model};

#[derive(Debug, Clone)]
pub struct ProjectRepoPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProjectRepoPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn db_err(e: sea_orm::DbErr) -> ProjectRepositoryError {
    ProjectRepositoryError::Database(e.to_string())
}

fn title_matches(title: &str) -> sea_orm::sea_query::SimpleExpr {
    Expr::expr(Func::lower(Expr::col(Column::Title))).eq(title.to_lowercase())
}

#[async_trait]
impl ProjectRepository for ProjectRepoPostgres {
    async fn create(&self, data: ProjectData) -> Result<ProjectRecord, ProjectRepositoryError> {
        // Title scan and insert share one transaction so two concurrent
        // creates cannot both pass the scan.
        let txn = self.db.begin().await.map_err(db_err)?;

        let duplicate = Entity::find()
            .filter(title_matches(&data.title))
            .one(&txn)
            .await
            .map_err(db_err)?;

        if duplicate.is_some() {
            txn.rollback().await.map_err(db_err)?;
            return Err(ProjectRepositoryError::DuplicateTitle);
        }

        let active = ActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(data.title),
            description: Set(data.description),
            tech_stack: Set(data.tech_stack),
            github_link: Set(data.github_link),
            live_demo_link: Set(data.live_demo_link),
        };

        let inserted: Model = active.insert(&txn).await.map_err(db_err)?;
        txn.commit().await.map_err(db_err)?;

        Ok(inserted.to_record())
    }

    async fn update(
        &self,
        id: Uuid,
        data: ProjectData,
    ) -> Result<ProjectRecord, ProjectRepositoryError> {
        let txn = self.db.begin().await.map_err(db_err)?;

        let existing = Entity::find_by_id(id)
            .one(&txn)
            .await
            .map_err(db_err)?
            .ok_or(ProjectRepositoryError::NotFound)?;

        let duplicate = Entity::find()
            .filter(title_matches(&data.title))
            .filter(Column::Id.ne(id))
            .one(&txn)
            .await
            .map_err(db_err)?;

        if duplicate.is_some() {
            txn.rollback().await.map_err(db_err)?;
            return Err(ProjectRepositoryError::DuplicateTitle);
        }

        let mut active: ActiveModel = existing.into();
        active.title = Set(data.title);
        active.description = Set(data.description);
        active.tech_stack = Set(data.tech_stack);
        active.github_link = Set(data.github_link);
        active.live_demo_link = Set(data.live_demo_link);

        let updated: Model = active.update(&txn).await.map_err(db_err)?;
        txn.commit().await.map_err(db_err)?;

        Ok(updated.to_record())
    }

    async fn delete(&self, id: Uuid) -> Result<(), ProjectRepositoryError> {
        let result = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(db_err)?;

        if result.rows_affected == 0 {
            return Err(ProjectRepositoryError::NotFound);
        }

        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<ProjectRecord>, ProjectRepositoryError> {
        let found = Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(db_err)?;

        Ok(found.map(|m| m.to_record()))
    }

    async fn find_all(&self) -> Result<Vec<ProjectRecord>, ProjectRepositoryError> {
        let models = Entity::find().all(&*self.db).await.map_err(db_err)?;

        Ok(models.iter().map(Model::to_record).collect())
    }
}
