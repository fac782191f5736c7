use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20240301_000001_create_user_table::User,
    m20240301_000002_create_board_category_table::BoardCategory,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Board::Table)
                    .if_not_exists()
                    .col(pk_auto(Board::Id))
                    .col(string(Board::Title))
                    .col(text(Board::Contents))
                    .col(
                        timestamp_with_time_zone(Board::DateTime)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(integer(Board::UserId))
                    .col(integer(Board::BoardCategoryId))
                    .col(boolean(Board::Ban).default(false))
                    .col(boolean(Board::IsDeleted).default(false))
                    .col(boolean(Board::IsModified).default(false))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_board_user_id")
                            .from(Board::Table, Board::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_board_board_category_id")
                            .from(Board::Table, Board::BoardCategoryId)
                            .to(BoardCategory::Table, BoardCategory::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Board::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Board {
    Table,
    Id,
    Title,
    Contents,
    DateTime,
    UserId,
    BoardCategoryId,
    Ban,
    IsDeleted,
    IsModified,
}
