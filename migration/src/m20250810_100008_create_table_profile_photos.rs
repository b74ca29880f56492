use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ProfilePhotos::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ProfilePhotos::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(
                        ColumnDef::new(ProfilePhotos::FileName)
                            .string_len(500)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ProfilePhotos::OriginalFileName)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ProfilePhotos::FileFormat)
                            .string_len(10)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ProfilePhotos::FileSize)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ProfilePhotos::ContentType)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(ColumnDef::new(ProfilePhotos::ImageData).binary().not_null())
                    .col(
                        ColumnDef::new(ProfilePhotos::ImageWidth)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ProfilePhotos::ImageHeight)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ProfilePhotos::UploadedDate)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(ProfilePhotos::IsActive)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE UNIQUE INDEX IF NOT EXISTS idx_profile_photos_single_active
                ON profile_photos (is_active) WHERE is_active;
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
                DROP INDEX IF EXISTS idx_profile_photos_single_active;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ProfilePhotos::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ProfilePhotos {
    Table,
    Id,
    FileName,
    OriginalFileName,
    FileFormat,
    FileSize,
    ContentType,
    ImageData,
    ImageWidth,
    ImageHeight,
    UploadedDate,
    IsActive,
}
