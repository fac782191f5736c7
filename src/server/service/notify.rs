//! Reports and moderation.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{board::BoardRepository, notify::NotifyRepository},
    error::AppError,
    model::notify::Notify,
};

pub struct NotifyService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NotifyService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Reports a visible board
    pub async fn report(&self, board_id: i32, user_id: i32, reason: String) -> Result<(), AppError> {
        if BoardRepository::new(self.db)
            .find_visible(board_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Board not found".to_string()));
        }

        let notify = NotifyRepository::new(self.db)
            .create(board_id, user_id, reason)
            .await?;
        tracing::info!("User {} reported board {} (report {})", user_id, board_id, notify.id);

        Ok(())
    }

    /// Gets unresolved reports
    pub async fn get_pending(&self) -> Result<Vec<Notify>, AppError> {
        Ok(NotifyRepository::new(self.db).get_pending().await?)
    }

    /// Bans a board and resolves the report that triggered it.
    ///
    /// Both writes happen in one transaction; a missing board or report, or a report
    /// filed against a different board, rolls back and nothing changes.
    ///
    /// # Returns
    /// - `Ok(())` - Board banned and report resolved
    /// - `Err(AppError::NotFound)` - Board or pending report missing
    /// - `Err(AppError::BadRequest)` - Report belongs to another board
    /// - `Err(AppError::DbErr)` - Storage failure
    pub async fn ban(&self, board_id: i32, board_notify_id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;
        let repo = NotifyRepository::new(&txn);

        let board = repo
            .find_board(board_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Board not found".to_string()))?;
        let notify = repo
            .find_pending(board_notify_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Report not found".to_string()))?;

        if notify.board_id != board_id {
            return Err(AppError::BadRequest(format!(
                "Report {} was not filed against board {}",
                board_notify_id, board_id
            )));
        }

        repo.ban_board(board).await?;
        repo.resolve(notify).await?;

        txn.commit().await?;
        tracing::info!("Banned board {} (report {})", board_id, board_notify_id);

        Ok(())
    }
}
