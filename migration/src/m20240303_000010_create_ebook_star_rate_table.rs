use sea_orm_migration::{prelude::*, schema::*};

use super::{m20240301_000001_create_user_table::User, m20240303_000009_create_ebook_table::Ebook};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EbookStarRate::Table)
                    .if_not_exists()
                    .col(pk_auto(EbookStarRate::Id))
                    .col(integer(EbookStarRate::EbookId))
                    .col(integer(EbookStarRate::UserId))
                    .col(integer(EbookStarRate::Rate))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_ebook_star_rate_ebook_id")
                            .from(EbookStarRate::Table, EbookStarRate::EbookId)
                            .to(Ebook::Table, Ebook::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_ebook_star_rate_user_id")
                            .from(EbookStarRate::Table, EbookStarRate::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_ebook_star_rate_ebook_user")
                    .table(EbookStarRate::Table)
                    .col(EbookStarRate::EbookId)
                    .col(EbookStarRate::UserId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EbookStarRate::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum EbookStarRate {
    Table,
    Id,
    EbookId,
    UserId,
    Rate,
}
