//! Q&A data repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Select,
};

use crate::server::model::{
    page::PageRequest,
    qna::{CreateQnaParams, Qna, UpdateQnaParams},
};

pub struct QnaRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> QnaRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    fn visible() -> Select<entity::qna::Entity> {
        entity::prelude::Qna::find()
            .filter(entity::qna::Column::IsDeleted.eq(false))
            .filter(entity::qna::Column::Ban.eq(false))
    }

    /// Gets paginated visible entries, newest first.
    pub async fn get_paginated(&self, page: &PageRequest) -> Result<(Vec<Qna>, u64), DbErr> {
        let total = Self::visible().count(self.db).await?;

        let entries = Self::visible()
            .order_by_desc(entity::qna::Column::Id)
            .offset(page.offset())
            .limit(page.limit())
            .all(self.db)
            .await?;

        Ok((entries.into_iter().map(Qna::from_entity).collect(), total))
    }

    /// Finds a visible entry by ID.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::qna::Model>, DbErr> {
        Self::visible()
            .filter(entity::qna::Column::Id.eq(id))
            .one(self.db)
            .await
    }

    pub async fn create(&self, params: CreateQnaParams) -> Result<Qna, DbErr> {
        let entity = entity::qna::ActiveModel {
            title: ActiveValue::Set(params.title),
            contents: ActiveValue::Set(params.contents),
            user_id: ActiveValue::Set(params.user_id),
            username: ActiveValue::Set(Some(params.username)),
            date_time: ActiveValue::Set(Utc::now()),
            is_secret: ActiveValue::Set(params.is_secret),
            ban: ActiveValue::Set(false),
            is_deleted: ActiveValue::Set(false),
            is_modified: ActiveValue::Set(false),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Qna::from_entity(entity))
    }

    pub async fn update(
        &self,
        qna: entity::qna::Model,
        params: UpdateQnaParams,
    ) -> Result<Qna, DbErr> {
        let mut active: entity::qna::ActiveModel = qna.into();
        active.title = ActiveValue::Set(params.title);
        active.contents = ActiveValue::Set(params.contents);
        active.is_secret = ActiveValue::Set(params.is_secret);
        active.is_modified = ActiveValue::Set(true);

        Ok(Qna::from_entity(active.update(self.db).await?))
    }

    pub async fn soft_delete(&self, qna: entity::qna::Model) -> Result<(), DbErr> {
        let mut active: entity::qna::ActiveModel = qna.into();
        active.is_deleted = ActiveValue::Set(true);
        active.update(self.db).await?;
        Ok(())
    }
}
