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
                    .table(BoardNotify::Table)
                    .if_not_exists()
                    .col(pk_auto(BoardNotify::Id))
                    .col(text(BoardNotify::Reason))
                    .col(
                        timestamp_with_time_zone(BoardNotify::DateTime)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(integer(BoardNotify::BoardId))
                    .col(integer(BoardNotify::UserId))
                    .col(boolean(BoardNotify::IsChecked).default(false))
                    .col(boolean(BoardNotify::IsDeleted).default(false))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_board_notify_board_id")
                            .from(BoardNotify::Table, BoardNotify::BoardId)
                            .to(Board::Table, Board::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_board_notify_user_id")
                            .from(BoardNotify::Table, BoardNotify::UserId)
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
            .drop_table(Table::drop().table(BoardNotify::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum BoardNotify {
    Table,
    Id,
    Reason,
    DateTime,
    BoardId,
    UserId,
    IsChecked,
    IsDeleted,
}
