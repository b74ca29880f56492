use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Resumes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Resumes::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Resumes::FileName).string_len(500).not_null())
                    .col(
                        ColumnDef::new(Resumes::OriginalFileName)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Resumes::FileFormat)
                            .string_len(10)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Resumes::FileSize).big_integer().not_null())
                    .col(
                        ColumnDef::new(Resumes::ContentType)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Resumes::FileData).binary().not_null())
                    .col(
                        ColumnDef::new(Resumes::UploadedDate)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Resumes::IsActive)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .to_owned(),
            )
            .await?;

        // Database-level backstop for the single-active invariant. The
        // deactivate-all-then-activate transaction is the primary guard.
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE UNIQUE INDEX IF NOT EXISTS idx_resumes_single_active
                ON resumes (is_active) WHERE is_active;
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP INDEX IF EXISTS idx_resumes_single_active;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Resumes::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Resumes {
    Table,
    Id,
    FileName,
    OriginalFileName,
    FileFormat,
    FileSize,
    ContentType,
    FileData,
    UploadedDate,
    IsActive,
}
