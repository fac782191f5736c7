use sea_orm_migration::{prelude::*, schema::*};

use super::{m20240301_000001_create_user_table::User, m20240301_000003_create_board_table::Board};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BoardComment::Table)
                    .if_not_exists()
                    .col(pk_auto(BoardComment::Id))
                    .col(text(BoardComment::Contents))
                    .col(
                        timestamp_with_time_zone(BoardComment::DateTime)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(integer(BoardComment::BoardId))
                    .col(integer(BoardComment::UserId))
                    .col(boolean(BoardComment::IsDeleted).default(false))
                    .col(boolean(BoardComment::IsModified).default(false))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_board_comment_board_id")
                            .from(BoardComment::Table, BoardComment::BoardId)
                            .to(Board::Table, Board::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_board_comment_user_id")
                            .from(BoardComment::Table, BoardComment::UserId)
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
            .drop_table(Table::drop().table(BoardComment::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum BoardComment {
    Table,
    Id,
    Contents,
    DateTime,
    BoardId,
    UserId,
    IsDeleted,
    IsModified,
}
