use chrono::{DateTime, Utc};

use crate::model::small_talk::{
    CreateSmallSubjectDto, RandomSubjectDto, SmallSubjectDetailDto, SmallSubjectDto,
    SmallTalkDto,
};

/// Small talk subject with its author's display details.
#[derive(Debug, Clone, PartialEq)]
pub struct SmallSubject {
    pub id: i32,
    pub title: String,
    pub detail: String,
    pub img_url: Option<String>,
    pub date_time: DateTime<Utc>,
    pub user_id: i32,
    pub nickname: String,
    pub user_img: Option<String>,
}

impl SmallSubject {
    pub fn from_entity(
        entity: entity::small_subject::Model,
        user: Option<&entity::user::Model>,
    ) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            detail: entity.detail,
            img_url: entity.img_url,
            date_time: entity.date_time,
            user_id: entity.user_id,
            nickname: user.map(|u| u.nickname.clone()).unwrap_or_default(),
            user_img: user.and_then(|u| u.img.clone()),
        }
    }

    pub fn into_dto(self) -> SmallSubjectDto {
        SmallSubjectDto {
            id: self.id,
            title: self.title,
            detail: self.detail,
            img_url: self.img_url,
            date_time: self.date_time,
            user_id: self.user_id,
            nickname: self.nickname,
            user_img: self.user_img,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SmallTalk {
    pub id: i32,
    pub contents: String,
    pub date_time: DateTime<Utc>,
    pub user_id: i32,
    pub nickname: String,
}

impl SmallTalk {
    pub fn from_entity(
        entity: entity::small_talk::Model,
        user: Option<&entity::user::Model>,
    ) -> Self {
        Self {
            id: entity.id,
            contents: entity.contents,
            date_time: entity.date_time,
            user_id: entity.user_id,
            nickname: user.map(|u| u.nickname.clone()).unwrap_or_default(),
        }
    }

    pub fn into_dto(self) -> SmallTalkDto {
        SmallTalkDto {
            id: self.id,
            contents: self.contents,
            date_time: self.date_time,
            user_id: self.user_id,
            nickname: self.nickname,
        }
    }
}

/// A subject and the talks posted under it, newest first.
#[derive(Debug, Clone, PartialEq)]
pub struct SmallSubjectDetail {
    pub subject: SmallSubject,
    pub talks: Vec<SmallTalk>,
}

impl SmallSubjectDetail {
    pub fn into_dto(self) -> SmallSubjectDetailDto {
        SmallSubjectDetailDto {
            sub: self.subject.into_dto(),
            list: self.talks.into_iter().map(SmallTalk::into_dto).collect(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateSmallSubjectParams {
    pub user_id: i32,
    pub title: String,
    pub detail: String,
    pub img_url: Option<String>,
}

impl CreateSmallSubjectParams {
    pub fn from_dto(user_id: i32, dto: CreateSmallSubjectDto) -> Self {
        Self {
            user_id,
            title: dto.title,
            detail: dto.detail,
            img_url: dto.img_url,
        }
    }
}

/// Outcome of creating a subject.
#[derive(Debug, Clone, PartialEq)]
pub enum CreateSubjectOutcome {
    Created(SmallSubject),
    DuplicateTitle,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RandomSubject {
    pub id: i32,
    pub subject: String,
}

impl RandomSubject {
    pub fn from_entity(entity: entity::random_subject::Model) -> Self {
        Self {
            id: entity.id,
            subject: entity.subject,
        }
    }

    pub fn into_dto(self) -> RandomSubjectDto {
        RandomSubjectDto {
            id: self.id,
            subject: self.subject,
        }
    }
}
