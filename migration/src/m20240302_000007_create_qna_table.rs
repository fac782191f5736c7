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
                    .table(Qna::Table)
                    .if_not_exists()
                    .col(pk_auto(Qna::Id))
                    .col(string(Qna::Title))
                    .col(text(Qna::Contents))
                    .col(integer(Qna::UserId))
                    .col(string_null(Qna::Username))
                    .col(
                        timestamp_with_time_zone(Qna::DateTime)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(boolean(Qna::IsSecret).default(false))
                    .col(boolean(Qna::Ban).default(false))
                    .col(boolean(Qna::IsDeleted).default(false))
                    .col(boolean(Qna::IsModified).default(false))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_qna_user_id")
                            .from(Qna::Table, Qna::UserId)
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
            .drop_table(Table::drop().table(Qna::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Qna {
    Table,
    Id,
    Title,
    Contents,
    UserId,
    Username,
    DateTime,
    IsSecret,
    Ban,
    IsDeleted,
    IsModified,
}
