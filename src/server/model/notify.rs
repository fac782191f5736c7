use chrono::{DateTime, Utc};

use crate::model::notify::NotifyDto;

/// A pending report against a board.
#[derive(Debug, Clone, PartialEq)]
pub struct Notify {
    pub id: i32,
    pub reason: String,
    pub date_time: DateTime<Utc>,
    pub board_id: i32,
    pub board_title: String,
    pub user_id: i32,
    pub is_checked: bool,
}

impl Notify {
    pub fn from_entity(
        entity: entity::board_notify::Model,
        board: Option<&entity::board::Model>,
    ) -> Self {
        Self {
            id: entity.id,
            reason: entity.reason,
            date_time: entity.date_time,
            board_id: entity.board_id,
            board_title: board.map(|b| b.title.clone()).unwrap_or_default(),
            user_id: entity.user_id,
            is_checked: entity.is_checked,
        }
    }

    pub fn into_dto(self) -> NotifyDto {
        NotifyDto {
            id: self.id,
            reason: self.reason,
            date_time: self.date_time,
            board_id: self.board_id,
            board_title: self.board_title,
            user_id: self.user_id,
            is_checked: self.is_checked,
        }
    }
}
