//! Small talk subjects, talks and random subjects.

use chrono::Utc;
use rand::Rng;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::{
    data::user::UserRepository,
    model::small_talk::{CreateSmallSubjectParams, RandomSubject, SmallSubject, SmallTalk},
};

pub struct SmallTalkRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SmallTalkRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Whether any subject, deleted or not, already uses the title.
    ///
    /// Titles are unique across the whole table.
    pub async fn title_exists(&self, title: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::SmallSubject::find()
            .filter(entity::small_subject::Column::Title.eq(title))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    pub async fn create_subject(
        &self,
        params: CreateSmallSubjectParams,
    ) -> Result<SmallSubject, DbErr> {
        let entity = entity::small_subject::ActiveModel {
            title: ActiveValue::Set(params.title),
            detail: ActiveValue::Set(params.detail),
            img_url: ActiveValue::Set(params.img_url),
            date_time: ActiveValue::Set(Utc::now()),
            user_id: ActiveValue::Set(params.user_id),
            is_deleted: ActiveValue::Set(false),
            is_modified: ActiveValue::Set(false),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        let user = UserRepository::new(self.db)
            .find_by_id(entity.user_id)
            .await?;

        Ok(SmallSubject::from_entity(entity, user.as_ref()))
    }

    /// Finds a subject that has not been deleted.
    pub async fn find_subject(
        &self,
        id: i32,
    ) -> Result<Option<entity::small_subject::Model>, DbErr> {
        entity::prelude::SmallSubject::find_by_id(id)
            .filter(entity::small_subject::Column::IsDeleted.eq(false))
            .one(self.db)
            .await
    }

    pub async fn soft_delete_subject(
        &self,
        subject: entity::small_subject::Model,
    ) -> Result<(), DbErr> {
        let mut active: entity::small_subject::ActiveModel = subject.into();
        active.is_deleted = ActiveValue::Set(true);
        active.update(self.db).await?;
        Ok(())
    }

    /// Lists subjects newest first, optionally filtered by a title substring.
    pub async fn list_subjects(&self, title: Option<&str>) -> Result<Vec<SmallSubject>, DbErr> {
        let mut query = entity::prelude::SmallSubject::find()
            .filter(entity::small_subject::Column::IsDeleted.eq(false));
        if let Some(title) = title.map(str::trim).filter(|t| !t.is_empty()) {
            query = query.filter(entity::small_subject::Column::Title.contains(title));
        }

        let subjects = query
            .order_by_desc(entity::small_subject::Column::Id)
            .all(self.db)
            .await?;

        let users = UserRepository::new(self.db)
            .find_map(subjects.iter().map(|s| s.user_id).collect())
            .await?;

        Ok(subjects
            .into_iter()
            .map(|s| {
                let user = users.get(&s.user_id);
                SmallSubject::from_entity(s, user)
            })
            .collect())
    }

    /// Gets a subject with author details.
    pub async fn get_subject(&self, id: i32) -> Result<Option<SmallSubject>, DbErr> {
        let Some(subject) = self.find_subject(id).await? else {
            return Ok(None);
        };
        let user = UserRepository::new(self.db)
            .find_by_id(subject.user_id)
            .await?;

        Ok(Some(SmallSubject::from_entity(subject, user.as_ref())))
    }

    /// Gets a subject's talks, newest first.
    pub async fn get_talks(&self, small_subject_id: i32) -> Result<Vec<SmallTalk>, DbErr> {
        let talks = entity::prelude::SmallTalk::find()
            .filter(entity::small_talk::Column::SmallSubjectId.eq(small_subject_id))
            .filter(entity::small_talk::Column::IsDeleted.eq(false))
            .order_by_desc(entity::small_talk::Column::Id)
            .all(self.db)
            .await?;

        let users = UserRepository::new(self.db)
            .find_map(talks.iter().map(|t| t.user_id).collect())
            .await?;

        Ok(talks
            .into_iter()
            .map(|t| {
                let user = users.get(&t.user_id);
                SmallTalk::from_entity(t, user)
            })
            .collect())
    }

    pub async fn create_talk(
        &self,
        small_subject_id: i32,
        user_id: i32,
        contents: String,
    ) -> Result<entity::small_talk::Model, DbErr> {
        entity::small_talk::ActiveModel {
            contents: ActiveValue::Set(contents),
            date_time: ActiveValue::Set(Utc::now()),
            small_subject_id: ActiveValue::Set(small_subject_id),
            user_id: ActiveValue::Set(user_id),
            is_deleted: ActiveValue::Set(false),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Picks a uniformly random row of `random_subject`.
    ///
    /// # Returns
    /// - `Ok(Some(RandomSubject))` - A random subject
    /// - `Ok(None)` - The table is empty
    /// - `Err(DbErr)` - Database error during query
    pub async fn random_subject(&self) -> Result<Option<RandomSubject>, DbErr> {
        let count = entity::prelude::RandomSubject::find().count(self.db).await?;
        if count == 0 {
            return Ok(None);
        }

        let offset = rand::rng().random_range(0..count);

        Ok(entity::prelude::RandomSubject::find()
            .order_by_asc(entity::random_subject::Column::Id)
            .offset(offset)
            .limit(1)
            .one(self.db)
            .await?
            .map(RandomSubject::from_entity))
    }
}
