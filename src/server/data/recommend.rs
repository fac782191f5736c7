//! Recommendation rows and the per-board recommend count.
//!
//! The repository is generic over `ConnectionTrait` so the toggle's write, read-back
//! and count all run on the same transaction.

use sea_orm::{
    sea_query::{Expr, ExprTrait, OnConflict},
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

pub struct RecommendRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RecommendRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Whether the board exists and can be recommended (not deleted, not banned).
    pub async fn board_is_open(&self, board_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Board::find()
            .filter(entity::board::Column::Id.eq(board_id))
            .filter(entity::board::Column::IsDeleted.eq(false))
            .filter(entity::board::Column::Ban.eq(false))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Finds the recommendation row for a (board, user) pair.
    pub async fn find(
        &self,
        board_id: i32,
        user_id: i32,
    ) -> Result<Option<entity::board_recommend::Model>, DbErr> {
        entity::prelude::BoardRecommend::find()
            .filter(entity::board_recommend::Column::BoardId.eq(board_id))
            .filter(entity::board_recommend::Column::UserId.eq(user_id))
            .one(self.db)
            .await
    }

    /// Inserts a `check = true` row unless one already exists for the pair.
    ///
    /// Relies on the unique `(board_id, user_id)` index; a conflicting insert is a no-op.
    ///
    /// # Returns
    /// - `Ok(true)` - This call inserted the row
    /// - `Ok(false)` - A row already existed (possibly inserted concurrently)
    /// - `Err(DbErr)` - Database error during insert
    pub async fn insert_if_absent(&self, board_id: i32, user_id: i32) -> Result<bool, DbErr> {
        let inserted = entity::prelude::BoardRecommend::insert(entity::board_recommend::ActiveModel {
            board_id: ActiveValue::Set(board_id),
            user_id: ActiveValue::Set(user_id),
            check: ActiveValue::Set(true),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::columns([
                entity::board_recommend::Column::BoardId,
                entity::board_recommend::Column::UserId,
            ])
            .do_nothing()
            .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(inserted > 0)
    }

    /// Inverts `check` on the pair's row in one statement and returns the row.
    ///
    /// The UPDATE's row lock orders concurrent flips; each one negates the latest
    /// committed value rather than a value read earlier.
    ///
    /// # Returns
    /// - `Ok(Some(row))` - Row after the flip
    /// - `Ok(None)` - No row exists for the pair
    /// - `Err(DbErr)` - Database error during update
    pub async fn flip_check(
        &self,
        board_id: i32,
        user_id: i32,
    ) -> Result<Option<entity::board_recommend::Model>, DbErr> {
        let result = entity::prelude::BoardRecommend::update_many()
            .col_expr(
                entity::board_recommend::Column::Check,
                Expr::col(entity::board_recommend::Column::Check).not(),
            )
            .filter(entity::board_recommend::Column::BoardId.eq(board_id))
            .filter(entity::board_recommend::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        self.find(board_id, user_id).await
    }

    /// Number of users currently recommending the board.
    pub async fn count(&self, board_id: i32) -> Result<u64, DbErr> {
        entity::prelude::BoardRecommend::find()
            .filter(entity::board_recommend::Column::BoardId.eq(board_id))
            .filter(entity::board_recommend::Column::Check.eq(true))
            .count(self.db)
            .await
    }

    /// IDs of boards the user currently recommends, most recent recommendation first.
    pub async fn liked_board_ids(&self, user_id: i32) -> Result<Vec<i32>, DbErr> {
        entity::prelude::BoardRecommend::find()
            .select_only()
            .column(entity::board_recommend::Column::BoardId)
            .filter(entity::board_recommend::Column::UserId.eq(user_id))
            .filter(entity::board_recommend::Column::Check.eq(true))
            .order_by_desc(entity::board_recommend::Column::Id)
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }
}
