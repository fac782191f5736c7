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
                    .table(BoardRecommend::Table)
                    .if_not_exists()
                    .col(pk_auto(BoardRecommend::Id))
                    .col(integer(BoardRecommend::BoardId))
                    .col(integer(BoardRecommend::UserId))
                    .col(boolean(BoardRecommend::Check).default(true))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_board_recommend_board_id")
                            .from(BoardRecommend::Table, BoardRecommend::BoardId)
                            .to(Board::Table, Board::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_board_recommend_user_id")
                            .from(BoardRecommend::Table, BoardRecommend::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // The recommend toggle relies on this index to make the first insert race-safe
        manager
            .create_index(
                Index::create()
                    .name("idx_board_recommend_board_user")
                    .table(BoardRecommend::Table)
                    .col(BoardRecommend::BoardId)
                    .col(BoardRecommend::UserId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BoardRecommend::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum BoardRecommend {
    Table,
    Id,
    BoardId,
    UserId,
    Check,
}
