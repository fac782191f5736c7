use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BoardCategory::Table)
                    .if_not_exists()
                    .col(pk_auto(BoardCategory::Id))
                    .col(string(BoardCategory::Category))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BoardCategory::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum BoardCategory {
    Table,
    Id,
    Category,
}
