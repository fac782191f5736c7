//! Board factories: categories, boards, comments, recommendations and reports.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test boards with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let board = BoardFactory::new(&db, user.id, category.id)
///     .title("hello world")
///     .banned(true)
///     .build()
///     .await?;
/// ```
pub struct BoardFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    board_category_id: i32,
    title: String,
    contents: String,
    ban: bool,
    is_deleted: bool,
}

impl<'a> BoardFactory<'a> {
    /// Creates a new BoardFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Board {n}"`
    /// - contents: `"Contents of board {n}"`
    /// - ban / is_deleted: `false`
    pub fn new(db: &'a DatabaseConnection, user_id: i32, board_category_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            user_id,
            board_category_id,
            title: format!("Board {}", id),
            contents: format!("Contents of board {}", id),
            ban: false,
            is_deleted: false,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn contents(mut self, contents: impl Into<String>) -> Self {
        self.contents = contents.into();
        self
    }

    pub fn banned(mut self, ban: bool) -> Self {
        self.ban = ban;
        self
    }

    pub fn deleted(mut self, is_deleted: bool) -> Self {
        self.is_deleted = is_deleted;
        self
    }

    /// Builds and inserts the board entity into the database.
    pub async fn build(self) -> Result<entity::board::Model, DbErr> {
        entity::board::ActiveModel {
            title: ActiveValue::Set(self.title),
            contents: ActiveValue::Set(self.contents),
            date_time: ActiveValue::Set(Utc::now()),
            user_id: ActiveValue::Set(self.user_id),
            board_category_id: ActiveValue::Set(self.board_category_id),
            ban: ActiveValue::Set(self.ban),
            is_deleted: ActiveValue::Set(self.is_deleted),
            is_modified: ActiveValue::Set(false),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a board category named `"Category {n}"`.
pub async fn create_category(
    db: &DatabaseConnection,
) -> Result<entity::board_category::Model, DbErr> {
    entity::board_category::ActiveModel {
        category: ActiveValue::Set(format!("Category {}", next_id())),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Creates a board with default values.
///
/// Shorthand for `BoardFactory::new(db, user_id, board_category_id).build().await`.
pub async fn create_board(
    db: &DatabaseConnection,
    user_id: i32,
    board_category_id: i32,
) -> Result<entity::board::Model, DbErr> {
    BoardFactory::new(db, user_id, board_category_id)
        .build()
        .await
}

/// Creates a comment on a board.
pub async fn create_comment(
    db: &DatabaseConnection,
    board_id: i32,
    user_id: i32,
) -> Result<entity::board_comment::Model, DbErr> {
    entity::board_comment::ActiveModel {
        contents: ActiveValue::Set(format!("Comment {}", next_id())),
        date_time: ActiveValue::Set(Utc::now()),
        board_id: ActiveValue::Set(board_id),
        user_id: ActiveValue::Set(user_id),
        is_deleted: ActiveValue::Set(false),
        is_modified: ActiveValue::Set(false),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Inserts a recommendation row directly, bypassing the toggle logic.
pub async fn create_recommend(
    db: &DatabaseConnection,
    board_id: i32,
    user_id: i32,
    check: bool,
) -> Result<entity::board_recommend::Model, DbErr> {
    entity::board_recommend::ActiveModel {
        board_id: ActiveValue::Set(board_id),
        user_id: ActiveValue::Set(user_id),
        check: ActiveValue::Set(check),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Creates an unresolved report against a board.
pub async fn create_notify(
    db: &DatabaseConnection,
    board_id: i32,
    user_id: i32,
) -> Result<entity::board_notify::Model, DbErr> {
    entity::board_notify::ActiveModel {
        reason: ActiveValue::Set(format!("Reason {}", next_id())),
        date_time: ActiveValue::Set(Utc::now()),
        board_id: ActiveValue::Set(board_id),
        user_id: ActiveValue::Set(user_id),
        is_checked: ActiveValue::Set(false),
        is_deleted: ActiveValue::Set(false),
        ..Default::default()
    }
    .insert(db)
    .await
}
