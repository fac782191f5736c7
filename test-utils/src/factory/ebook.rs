//! E-book factories: series, e-books and star ratings.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a series owned by `user_id`.
pub async fn create_series(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::ebook_series::Model, DbErr> {
    entity::ebook_series::ActiveModel {
        name: ActiveValue::Set(format!("Series {}", next_id())),
        user_id: ActiveValue::Set(user_id),
        date_time: ActiveValue::Set(Utc::now()),
        is_deleted: ActiveValue::Set(false),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Creates an e-book outside of any series.
pub async fn create_ebook(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::ebook::Model, DbErr> {
    create_ebook_in_series(db, user_id, None).await
}

/// Creates an e-book, optionally attached to a series.
pub async fn create_ebook_in_series(
    db: &DatabaseConnection,
    user_id: i32,
    ebook_series_id: Option<i32>,
) -> Result<entity::ebook::Model, DbErr> {
    let id = next_id();
    entity::ebook::ActiveModel {
        title: ActiveValue::Set(format!("Ebook {}", id)),
        contents: ActiveValue::Set(format!("Chapter one of ebook {}", id)),
        user_id: ActiveValue::Set(user_id),
        ebook_series_id: ActiveValue::Set(ebook_series_id),
        date_time: ActiveValue::Set(Utc::now()),
        is_deleted: ActiveValue::Set(false),
        is_modified: ActiveValue::Set(false),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Inserts a star rating directly.
pub async fn create_star_rate(
    db: &DatabaseConnection,
    ebook_id: i32,
    user_id: i32,
    rate: i32,
) -> Result<entity::ebook_star_rate::Model, DbErr> {
    entity::ebook_star_rate::ActiveModel {
        ebook_id: ActiveValue::Set(ebook_id),
        user_id: ActiveValue::Set(user_id),
        rate: ActiveValue::Set(rate),
        ..Default::default()
    }
    .insert(db)
    .await
}
