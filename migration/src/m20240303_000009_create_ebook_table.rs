use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20240301_000001_create_user_table::User,
    m20240303_000008_create_ebook_series_table::EbookSeries,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Ebook::Table)
                    .if_not_exists()
                    .col(pk_auto(Ebook::Id))
                    .col(string(Ebook::Title))
                    .col(text(Ebook::Contents))
                    .col(integer(Ebook::UserId))
                    .col(integer_null(Ebook::EbookSeriesId))
                    .col(
                        timestamp_with_time_zone(Ebook::DateTime)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(boolean(Ebook::IsDeleted).default(false))
                    .col(boolean(Ebook::IsModified).default(false))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_ebook_user_id")
                            .from(Ebook::Table, Ebook::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_ebook_ebook_series_id")
                            .from(Ebook::Table, Ebook::EbookSeriesId)
                            .to(EbookSeries::Table, EbookSeries::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Ebook::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Ebook {
    Table,
    Id,
    Title,
    Contents,
    UserId,
    EbookSeriesId,
    DateTime,
    IsDeleted,
    IsModified,
}
