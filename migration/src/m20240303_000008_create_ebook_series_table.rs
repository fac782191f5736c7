use sea_orm_migration::{prelude::*, schema::*};

use super::m20240301_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EbookSeries::Table)
                    .if_not_exists()
                    .col(pk_auto(EbookSeries::Id))
                    .col(string(EbookSeries::Name))
                    .col(integer(EbookSeries::UserId))
                    .col(
                        timestamp_with_time_zone(EbookSeries::DateTime)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(boolean(EbookSeries::IsDeleted).default(false))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_ebook_series_user_id")
                            .from(EbookSeries::Table, EbookSeries::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EbookSeries::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum EbookSeries {
    Table,
    Id,
    Name,
    UserId,
    DateTime,
    IsDeleted,
}
