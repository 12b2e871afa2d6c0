use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Wishes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Wishes::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Wishes::Content).text().not_null())
                    .col(ColumnDef::new(Wishes::AnonymousId).text().null())
                    .col(ColumnDef::new(Wishes::CreatedAt).text().null())
                    .col(ColumnDef::new(Wishes::Status).text().default("PENDING"))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Wishes::Table).to_owned())
            .await
    }
}

// column names match the table the service has always written to
#[derive(DeriveIden)]
enum Wishes {
    Table,
    Id,
    Content,
    #[sea_orm(iden = "anonymousId")]
    AnonymousId,
    #[sea_orm(iden = "createdAt")]
    CreatedAt,
    Status,
}
