use sea_orm::DatabaseConnection;

use crate::server::{
    data::{board::BoardRepository, comment::CommentRepository},
    error::AppError,
    model::{comment::Comment, Ownership},
};

pub struct CommentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a board's comments, newest first
    pub async fn get_by_board(&self, board_id: i32) -> Result<Vec<Comment>, AppError> {
        Ok(CommentRepository::new(self.db)
            .get_by_board(board_id)
            .await?)
    }

    /// Comments on a visible board as the verified user
    pub async fn create(
        &self,
        board_id: i32,
        user_id: i32,
        contents: String,
    ) -> Result<(), AppError> {
        if BoardRepository::new(self.db)
            .find_visible(board_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Board not found".to_string()));
        }

        CommentRepository::new(self.db)
            .create(board_id, user_id, contents)
            .await?;

        Ok(())
    }

    /// Edits a comment if the caller wrote it
    pub async fn update(
        &self,
        id: i32,
        user_id: i32,
        contents: String,
    ) -> Result<Ownership<()>, AppError> {
        let repo = CommentRepository::new(self.db);

        let comment = repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Comment not found".to_string()))?;

        if comment.user_id != user_id {
            return Ok(Ownership::NotOwner);
        }

        repo.update(comment, contents).await?;

        Ok(Ownership::Owner(()))
    }

    /// Soft-deletes a comment if the caller wrote it
    pub async fn delete(&self, id: i32, user_id: i32) -> Result<Ownership<()>, AppError> {
        let repo = CommentRepository::new(self.db);

        let comment = repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Comment not found".to_string()))?;

        if comment.user_id != user_id {
            return Ok(Ownership::NotOwner);
        }

        repo.soft_delete(comment).await?;

        Ok(Ownership::Owner(()))
    }
}
