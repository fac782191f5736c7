use crate::server::{
    error::AppError,
    model::board::RecommendAction,
    service::recommend::RecommendService,
};
use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, TransactionTrait,
};
use test_utils::{
    builder::TestBuilder,
    factory::{self, board::BoardFactory},
};

mod concurrency;
mod toggle;

/// Rows stored for one (board, user) pair.
async fn rows_for(
    db: &DatabaseConnection,
    board_id: i32,
    user_id: i32,
) -> Result<Vec<entity::board_recommend::Model>, DbErr> {
    entity::prelude::BoardRecommend::find()
        .filter(entity::board_recommend::Column::BoardId.eq(board_id))
        .filter(entity::board_recommend::Column::UserId.eq(user_id))
        .all(db)
        .await
}

/// Active recommendations on a board, counted independently of the service.
async fn active_count(db: &DatabaseConnection, board_id: i32) -> Result<u64, DbErr> {
    entity::prelude::BoardRecommend::find()
        .filter(entity::board_recommend::Column::BoardId.eq(board_id))
        .filter(entity::board_recommend::Column::Check.eq(true))
        .count(db)
        .await
}
