//! Small talk factories: subjects, talks and random subjects.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a subject titled `"Subject {n}"`.
pub async fn create_subject(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::small_subject::Model, DbErr> {
    create_subject_with_title(db, user_id, format!("Subject {}", next_id())).await
}

/// Creates a subject with a specific title.
pub async fn create_subject_with_title(
    db: &DatabaseConnection,
    user_id: i32,
    title: impl Into<String>,
) -> Result<entity::small_subject::Model, DbErr> {
    entity::small_subject::ActiveModel {
        title: ActiveValue::Set(title.into()),
        detail: ActiveValue::Set("Let's talk".to_string()),
        img_url: ActiveValue::Set(None),
        date_time: ActiveValue::Set(Utc::now()),
        user_id: ActiveValue::Set(user_id),
        is_deleted: ActiveValue::Set(false),
        is_modified: ActiveValue::Set(false),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Creates a talk under a subject.
pub async fn create_talk(
    db: &DatabaseConnection,
    small_subject_id: i32,
    user_id: i32,
) -> Result<entity::small_talk::Model, DbErr> {
    entity::small_talk::ActiveModel {
        contents: ActiveValue::Set(format!("Talk {}", next_id())),
        date_time: ActiveValue::Set(Utc::now()),
        small_subject_id: ActiveValue::Set(small_subject_id),
        user_id: ActiveValue::Set(user_id),
        is_deleted: ActiveValue::Set(false),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Creates a random talk subject.
pub async fn create_random_subject(
    db: &DatabaseConnection,
    subject: impl Into<String>,
) -> Result<entity::random_subject::Model, DbErr> {
    entity::random_subject::ActiveModel {
        subject: ActiveValue::Set(subject.into()),
        ..Default::default()
    }
    .insert(db)
    .await
}
