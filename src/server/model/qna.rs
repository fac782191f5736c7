use chrono::{DateTime, Utc};

use crate::model::qna::{CreateQnaDto, QnaDto, QnaListItemDto, UpdateQnaDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Qna {
    pub id: i32,
    pub title: String,
    pub contents: String,
    pub user_id: i32,
    pub username: Option<String>,
    pub date_time: DateTime<Utc>,
    pub is_secret: bool,
    pub is_modified: bool,
}

impl Qna {
    pub fn from_entity(entity: entity::qna::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            contents: entity.contents,
            user_id: entity.user_id,
            username: entity.username,
            date_time: entity.date_time,
            is_secret: entity.is_secret,
            is_modified: entity.is_modified,
        }
    }

    /// Whether `user_id` may read this entry.
    pub fn is_visible_to(&self, user_id: i32) -> bool {
        !self.is_secret || self.user_id == user_id
    }

    pub fn into_dto(self) -> QnaDto {
        QnaDto {
            id: self.id,
            title: self.title,
            contents: self.contents,
            user_id: self.user_id,
            username: self.username,
            date_time: self.date_time,
            is_secret: self.is_secret,
            is_modified: self.is_modified,
        }
    }

    /// Listing form; contents are never exposed in listings.
    pub fn into_list_item_dto(self) -> QnaListItemDto {
        QnaListItemDto {
            id: self.id,
            title: self.title,
            username: self.username,
            date_time: self.date_time,
            is_secret: self.is_secret,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateQnaParams {
    pub user_id: i32,
    pub username: String,
    pub title: String,
    pub contents: String,
    pub is_secret: bool,
}

impl CreateQnaParams {
    pub fn from_dto(user_id: i32, username: String, dto: CreateQnaDto) -> Self {
        Self {
            user_id,
            username,
            title: dto.title,
            contents: dto.contents,
            is_secret: dto.is_secret,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpdateQnaParams {
    pub id: i32,
    pub title: String,
    pub contents: String,
    pub is_secret: bool,
}

impl From<UpdateQnaDto> for UpdateQnaParams {
    fn from(dto: UpdateQnaDto) -> Self {
        Self {
            id: dto.id,
            title: dto.title,
            contents: dto.contents,
            is_secret: dto.is_secret,
        }
    }
}
