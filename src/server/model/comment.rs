use chrono::{DateTime, Utc};

use crate::model::comment::CommentDto;

/// Comment with its author's display details.
#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub id: i32,
    pub contents: String,
    pub date_time: DateTime<Utc>,
    pub is_modified: bool,
    pub user_id: i32,
    pub nickname: String,
    pub img: Option<String>,
}

impl Comment {
    /// Converts a comment entity, falling back to an empty nickname when the author is gone.
    pub fn from_entity(
        entity: entity::board_comment::Model,
        user: Option<&entity::user::Model>,
    ) -> Self {
        Self {
            id: entity.id,
            contents: entity.contents,
            date_time: entity.date_time,
            is_modified: entity.is_modified,
            user_id: entity.user_id,
            nickname: user.map(|u| u.nickname.clone()).unwrap_or_default(),
            img: user.and_then(|u| u.img.clone()),
        }
    }

    pub fn into_dto(self) -> CommentDto {
        CommentDto {
            id: self.id,
            contents: self.contents,
            date_time: self.date_time,
            is_modified: self.is_modified,
            user_id: self.user_id,
            nickname: self.nickname,
            img: self.img,
        }
    }
}
