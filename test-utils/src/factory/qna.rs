//! Q&A factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating Q&A entries.
pub struct QnaFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    title: String,
    is_secret: bool,
    ban: bool,
}

impl<'a> QnaFactory<'a> {
    /// Defaults: public, not banned, title `"Question {n}"`.
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        Self {
            db,
            user_id,
            title: format!("Question {}", next_id()),
            is_secret: false,
            ban: false,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn secret(mut self, is_secret: bool) -> Self {
        self.is_secret = is_secret;
        self
    }

    pub fn banned(mut self, ban: bool) -> Self {
        self.ban = ban;
        self
    }

    pub async fn build(self) -> Result<entity::qna::Model, DbErr> {
        entity::qna::ActiveModel {
            title: ActiveValue::Set(self.title),
            contents: ActiveValue::Set("How does this work?".to_string()),
            user_id: ActiveValue::Set(self.user_id),
            username: ActiveValue::Set(Some(format!("user{}", self.user_id))),
            date_time: ActiveValue::Set(Utc::now()),
            is_secret: ActiveValue::Set(self.is_secret),
            ban: ActiveValue::Set(self.ban),
            is_deleted: ActiveValue::Set(false),
            is_modified: ActiveValue::Set(false),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a public Q&A entry.
pub async fn create_qna(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::qna::Model, DbErr> {
    QnaFactory::new(db, user_id).build().await
}
