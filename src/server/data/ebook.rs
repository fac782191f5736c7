//! E-book catalog data repository.
//!
//! Averages are computed from the individual rating rows rather than with SQL
//! aggregates; `get_paginated_by_rating` sorts the whole catalog in memory.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    sea_query::OnConflict, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder, Select,
};

use crate::server::model::{
    ebook::{CreateEbookParams, Ebook, EbookSeries, RatingSummary, UpdateEbookParams},
    page::PageRequest,
};

pub struct EbookRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EbookRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    fn visible() -> Select<entity::ebook::Entity> {
        entity::prelude::Ebook::find().filter(entity::ebook::Column::IsDeleted.eq(false))
    }

    /// Gets every visible e-book, newest first, with rating summaries.
    pub async fn get_all(&self) -> Result<Vec<Ebook>, DbErr> {
        let ebooks = Self::visible()
            .order_by_desc(entity::ebook::Column::Id)
            .all(self.db)
            .await?;

        self.with_ratings(ebooks).await
    }

    /// Gets one page of e-books ordered by average rating, highest first.
    ///
    /// Unrated e-books come last; ties keep the newest e-book first.
    pub async fn get_paginated_by_rating(
        &self,
        page: &PageRequest,
    ) -> Result<(Vec<Ebook>, u64), DbErr> {
        let mut ebooks = self.get_all().await?;
        ebooks.sort_by(|a, b| {
            let a_rate = a.rating.average.unwrap_or(f64::NEG_INFINITY);
            let b_rate = b.rating.average.unwrap_or(f64::NEG_INFINITY);
            b_rate.total_cmp(&a_rate)
        });

        let total = ebooks.len() as u64;
        let items = ebooks
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .collect();

        Ok((items, total))
    }

    /// Finds a visible e-book entity by ID.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::ebook::Model>, DbErr> {
        Self::visible()
            .filter(entity::ebook::Column::Id.eq(id))
            .one(self.db)
            .await
    }

    /// Gets a visible e-book with its rating summary.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Ebook>, DbErr> {
        let Some(ebook) = self.find_by_id(id).await? else {
            return Ok(None);
        };
        let rating = self.rating_summary(id).await?;

        Ok(Some(Ebook::from_entity(ebook, rating)))
    }

    pub async fn create(&self, params: CreateEbookParams) -> Result<Ebook, DbErr> {
        let entity = entity::ebook::ActiveModel {
            title: ActiveValue::Set(params.title),
            contents: ActiveValue::Set(params.contents),
            user_id: ActiveValue::Set(params.user_id),
            ebook_series_id: ActiveValue::Set(params.ebook_series_id),
            date_time: ActiveValue::Set(Utc::now()),
            is_deleted: ActiveValue::Set(false),
            is_modified: ActiveValue::Set(false),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Ebook::from_entity(entity, RatingSummary::default()))
    }

    pub async fn update(
        &self,
        ebook: entity::ebook::Model,
        params: UpdateEbookParams,
    ) -> Result<Ebook, DbErr> {
        let id = ebook.id;
        let mut active: entity::ebook::ActiveModel = ebook.into();
        active.title = ActiveValue::Set(params.title);
        active.contents = ActiveValue::Set(params.contents);
        active.ebook_series_id = ActiveValue::Set(params.ebook_series_id);
        active.is_modified = ActiveValue::Set(true);
        let entity = active.update(self.db).await?;
        let rating = self.rating_summary(id).await?;

        Ok(Ebook::from_entity(entity, rating))
    }

    pub async fn soft_delete(&self, ebook: entity::ebook::Model) -> Result<(), DbErr> {
        let mut active: entity::ebook::ActiveModel = ebook.into();
        active.is_deleted = ActiveValue::Set(true);
        active.update(self.db).await?;
        Ok(())
    }

    /// Inserts or replaces the user's rating of an e-book.
    ///
    /// One row per (ebook, user), enforced by a unique index.
    pub async fn upsert_rate(&self, ebook_id: i32, user_id: i32, rate: i32) -> Result<(), DbErr> {
        entity::prelude::EbookStarRate::insert(entity::ebook_star_rate::ActiveModel {
            ebook_id: ActiveValue::Set(ebook_id),
            user_id: ActiveValue::Set(user_id),
            rate: ActiveValue::Set(rate),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::columns([
                entity::ebook_star_rate::Column::EbookId,
                entity::ebook_star_rate::Column::UserId,
            ])
            .update_column(entity::ebook_star_rate::Column::Rate)
            .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(())
    }

    /// Summarizes one e-book's ratings.
    pub async fn rating_summary(&self, ebook_id: i32) -> Result<RatingSummary, DbErr> {
        let rates: Vec<i32> = entity::prelude::EbookStarRate::find()
            .filter(entity::ebook_star_rate::Column::EbookId.eq(ebook_id))
            .all(self.db)
            .await?
            .into_iter()
            .map(|r| r.rate)
            .collect();

        Ok(RatingSummary::from_rates(&rates))
    }

    /// Attaches rating summaries to e-books with a single ratings query.
    async fn with_ratings(&self, ebooks: Vec<entity::ebook::Model>) -> Result<Vec<Ebook>, DbErr> {
        if ebooks.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<i32> = ebooks.iter().map(|e| e.id).collect();
        let mut rates: HashMap<i32, Vec<i32>> = HashMap::new();
        for rate in entity::prelude::EbookStarRate::find()
            .filter(entity::ebook_star_rate::Column::EbookId.is_in(ids))
            .all(self.db)
            .await?
        {
            rates.entry(rate.ebook_id).or_default().push(rate.rate);
        }

        Ok(ebooks
            .into_iter()
            .map(|e| {
                let summary = rates
                    .get(&e.id)
                    .map(|r| RatingSummary::from_rates(r))
                    .unwrap_or_default();
                Ebook::from_entity(e, summary)
            })
            .collect())
    }

    /// Gets the user's series, newest first.
    pub async fn get_series_by_user(&self, user_id: i32) -> Result<Vec<EbookSeries>, DbErr> {
        Ok(entity::prelude::EbookSeries::find()
            .filter(entity::ebook_series::Column::UserId.eq(user_id))
            .filter(entity::ebook_series::Column::IsDeleted.eq(false))
            .order_by_desc(entity::ebook_series::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(EbookSeries::from_entity)
            .collect())
    }

    pub async fn create_series(&self, user_id: i32, name: String) -> Result<EbookSeries, DbErr> {
        let entity = entity::ebook_series::ActiveModel {
            name: ActiveValue::Set(name),
            user_id: ActiveValue::Set(user_id),
            date_time: ActiveValue::Set(Utc::now()),
            is_deleted: ActiveValue::Set(false),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(EbookSeries::from_entity(entity))
    }

    /// Whether the series exists and belongs to the user.
    pub async fn series_owned_by(&self, series_id: i32, user_id: i32) -> Result<bool, DbErr> {
        Ok(entity::prelude::EbookSeries::find_by_id(series_id)
            .filter(entity::ebook_series::Column::UserId.eq(user_id))
            .filter(entity::ebook_series::Column::IsDeleted.eq(false))
            .one(self.db)
            .await?
            .is_some())
    }
}
