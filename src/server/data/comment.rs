//! Board comment data repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::{data::user::UserRepository, model::comment::Comment};

pub struct CommentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a board's comments, newest first, with author nicknames.
    pub async fn get_by_board(&self, board_id: i32) -> Result<Vec<Comment>, DbErr> {
        let comments = entity::prelude::BoardComment::find()
            .filter(entity::board_comment::Column::BoardId.eq(board_id))
            .filter(entity::board_comment::Column::IsDeleted.eq(false))
            .order_by_desc(entity::board_comment::Column::Id)
            .all(self.db)
            .await?;

        let users = UserRepository::new(self.db)
            .find_map(comments.iter().map(|c| c.user_id).collect())
            .await?;

        Ok(comments
            .into_iter()
            .map(|c| {
                let user = users.get(&c.user_id);
                Comment::from_entity(c, user)
            })
            .collect())
    }

    /// Finds a comment that has not been deleted.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::board_comment::Model>, DbErr> {
        entity::prelude::BoardComment::find_by_id(id)
            .filter(entity::board_comment::Column::IsDeleted.eq(false))
            .one(self.db)
            .await
    }

    pub async fn create(
        &self,
        board_id: i32,
        user_id: i32,
        contents: String,
    ) -> Result<entity::board_comment::Model, DbErr> {
        entity::board_comment::ActiveModel {
            contents: ActiveValue::Set(contents),
            date_time: ActiveValue::Set(Utc::now()),
            board_id: ActiveValue::Set(board_id),
            user_id: ActiveValue::Set(user_id),
            is_deleted: ActiveValue::Set(false),
            is_modified: ActiveValue::Set(false),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Replaces a comment's contents and marks it modified.
    pub async fn update(
        &self,
        comment: entity::board_comment::Model,
        contents: String,
    ) -> Result<entity::board_comment::Model, DbErr> {
        let mut active: entity::board_comment::ActiveModel = comment.into();
        active.contents = ActiveValue::Set(contents);
        active.is_modified = ActiveValue::Set(true);
        active.update(self.db).await
    }

    pub async fn soft_delete(&self, comment: entity::board_comment::Model) -> Result<(), DbErr> {
        let mut active: entity::board_comment::ActiveModel = comment.into();
        active.is_deleted = ActiveValue::Set(true);
        active.update(self.db).await?;
        Ok(())
    }
}
