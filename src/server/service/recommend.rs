//! The recommend toggle.
//!
//! Each call moves the caller's `(board, user)` recommendation through
//! none → recommended → cancelled → recommended → ... and reports the board's new
//! count. An existing row is flipped with a single `SET check = NOT check` statement,
//! so concurrent flips never overwrite each other. The flip and the count share one
//! transaction; the unique `(board_id, user_id)` index makes a concurrent first
//! insert collapse into a flip of the winner's row instead of a second row.

use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, TransactionTrait};

use crate::server::{
    data::recommend::RecommendRepository,
    error::AppError,
    model::board::{RecommendAction, RecommendOutcome},
};

pub struct RecommendService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RecommendService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Toggles the user's recommendation of a board.
    ///
    /// # Arguments
    /// - `board_id` - Board to recommend
    /// - `user_id` - Verified caller
    ///
    /// # Returns
    /// - `Ok(RecommendOutcome)` - Applied transition and the board's recommend count
    /// - `Err(AppError::NotFound)` - Board missing, deleted or banned; nothing written
    /// - `Err(AppError::DbErr)` - Storage failure; the transaction was rolled back
    pub async fn toggle(&self, board_id: i32, user_id: i32) -> Result<RecommendOutcome, AppError> {
        let txn = self.db.begin().await?;

        // Dropping `txn` on any early return rolls it back
        let outcome = Self::toggle_in(&txn, board_id, user_id).await?;

        txn.commit().await?;

        tracing::debug!(
            "User {} {} on board {}, count now {}",
            user_id,
            outcome.action.message(),
            board_id,
            outcome.recommend_count
        );

        Ok(outcome)
    }

    /// Applies the toggle on an existing connection or transaction.
    pub(crate) async fn toggle_in<C: ConnectionTrait>(
        conn: &C,
        board_id: i32,
        user_id: i32,
    ) -> Result<RecommendOutcome, AppError> {
        let repo = RecommendRepository::new(conn);

        if !repo.board_is_open(board_id).await? {
            return Err(AppError::NotFound("Board not found".to_string()));
        }

        let action = match repo.flip_check(board_id, user_id).await? {
            Some(row) => flipped(row.check),
            None => Self::toggle_missing(conn, board_id, user_id).await?,
        };

        let recommend_count = repo.count(board_id).await?;

        Ok(RecommendOutcome {
            action,
            recommend_count,
        })
    }

    /// Handles a toggle that found no row for the pair.
    ///
    /// Inserts a recommended row. If a concurrent request inserted first, the
    /// conflict is a no-op and the winner's row is flipped instead.
    pub(crate) async fn toggle_missing<C: ConnectionTrait>(
        conn: &C,
        board_id: i32,
        user_id: i32,
    ) -> Result<RecommendAction, DbErr> {
        let repo = RecommendRepository::new(conn);

        if repo.insert_if_absent(board_id, user_id).await? {
            return Ok(RecommendAction::Created);
        }

        let row = repo.flip_check(board_id, user_id).await?.ok_or_else(|| {
            DbErr::RecordNotFound(format!(
                "Recommendation for board {} and user {} vanished after conflict",
                board_id, user_id
            ))
        })?;

        Ok(flipped(row.check))
    }
}

/// Transition implied by a row's `check` value after a flip.
fn flipped(check: bool) -> RecommendAction {
    if check {
        RecommendAction::Restored
    } else {
        RecommendAction::Cancelled
    }
}
