use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Educations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Educations::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Educations::Degree).string_len(200).not_null())
                    .col(ColumnDef::new(Educations::Field).string_len(200).not_null())
                    .col(
                        ColumnDef::new(Educations::University)
                            .string_len(200)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Educations::Institute)
                            .string_len(200)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Educations::Location).string_len(200))
                    // Dates are stored as caller-supplied sortable strings,
                    // matching the public API contract.
                    .col(
                        ColumnDef::new(Educations::StartDate)
                            .string_len(20)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Educations::EndDate).string_len(20))
                    .col(
                        ColumnDef::new(Educations::CurrentlyStudying)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Educations::Grade).string_len(50).not_null())
                    .col(
                        ColumnDef::new(Educations::EducationType)
                            .string_len(50)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Educations::Description).text())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Educations::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Educations {
    Table,
    Id,
    Degree,
    Field,
    University,
    Institute,
    Location,
    StartDate,
    EndDate,
    CurrentlyStudying,
    Grade,
    EducationType,
    Description,
}
