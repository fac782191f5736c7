use sea_orm::DatabaseConnection;

use crate::server::{
    data::ebook::EbookRepository,
    error::AppError,
    model::{
        ebook::{
            CreateEbookParams, Ebook, EbookSeries, RatingSummary, UpdateEbookParams, MAX_RATE,
            MIN_RATE,
        },
        page::{Page, PageRequest},
        Ownership,
    },
};

pub struct EbookService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EbookService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Ebook>, AppError> {
        Ok(EbookRepository::new(self.db).get_all().await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Ebook, AppError> {
        EbookRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Ebook not found".to_string()))
    }

    /// Checks the caller may file an e-book under `series_id`
    async fn owns_series(&self, series_id: Option<i32>, user_id: i32) -> Result<bool, AppError> {
        match series_id {
            Some(series_id) => Ok(EbookRepository::new(self.db)
                .series_owned_by(series_id, user_id)
                .await?),
            None => Ok(true),
        }
    }

    /// Creates an e-book; a series, when given, must belong to the caller
    pub async fn create(&self, params: CreateEbookParams) -> Result<Ownership<Ebook>, AppError> {
        if !self.owns_series(params.ebook_series_id, params.user_id).await? {
            return Ok(Ownership::NotOwner);
        }

        let ebook = EbookRepository::new(self.db).create(params).await?;

        Ok(Ownership::Owner(ebook))
    }

    /// Gets an e-book for editing, only for its author
    pub async fn get_for_update(&self, id: i32, user_id: i32) -> Result<Ownership<Ebook>, AppError> {
        let ebook = self.get_by_id(id).await?;

        if ebook.user_id != user_id {
            return Ok(Ownership::NotOwner);
        }

        Ok(Ownership::Owner(ebook))
    }

    pub async fn update(
        &self,
        params: UpdateEbookParams,
        user_id: i32,
    ) -> Result<Ownership<Ebook>, AppError> {
        let repo = EbookRepository::new(self.db);

        let ebook = repo
            .find_by_id(params.id)
            .await?
            .ok_or_else(|| AppError::NotFound("Ebook not found".to_string()))?;

        if ebook.user_id != user_id || !self.owns_series(params.ebook_series_id, user_id).await? {
            return Ok(Ownership::NotOwner);
        }

        let updated = repo.update(ebook, params).await?;

        Ok(Ownership::Owner(updated))
    }

    pub async fn delete(&self, id: i32, user_id: i32) -> Result<Ownership<()>, AppError> {
        let repo = EbookRepository::new(self.db);

        let ebook = repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Ebook not found".to_string()))?;

        if ebook.user_id != user_id {
            return Ok(Ownership::NotOwner);
        }

        repo.soft_delete(ebook).await?;

        Ok(Ownership::Owner(()))
    }

    /// Records the caller's rating, replacing any earlier one.
    ///
    /// # Returns
    /// - `Ok(RatingSummary)` - The e-book's ratings after the change
    /// - `Err(AppError::BadRequest)` - Rate outside 1..=5
    /// - `Err(AppError::NotFound)` - E-book missing or deleted
    pub async fn rate(
        &self,
        ebook_id: i32,
        user_id: i32,
        rate: i32,
    ) -> Result<RatingSummary, AppError> {
        if !(MIN_RATE..=MAX_RATE).contains(&rate) {
            return Err(AppError::BadRequest(format!(
                "Rate must be between {} and {}",
                MIN_RATE, MAX_RATE
            )));
        }

        let repo = EbookRepository::new(self.db);
        if repo.find_by_id(ebook_id).await?.is_none() {
            return Err(AppError::NotFound("Ebook not found".to_string()));
        }

        repo.upsert_rate(ebook_id, user_id, rate).await?;

        Ok(repo.rating_summary(ebook_id).await?)
    }

    /// Gets e-books ordered by average rating
    pub async fn get_paginated_by_rating(&self, page: PageRequest) -> Result<Page<Ebook>, AppError> {
        let (items, total) = EbookRepository::new(self.db)
            .get_paginated_by_rating(&page)
            .await?;

        Ok(Page::new(total, page.page_size, items))
    }

    pub async fn get_series(&self, user_id: i32) -> Result<Vec<EbookSeries>, AppError> {
        Ok(EbookRepository::new(self.db)
            .get_series_by_user(user_id)
            .await?)
    }

    pub async fn create_series(&self, user_id: i32, name: String) -> Result<EbookSeries, AppError> {
        let name = name.trim().to_string();
        if name.is_empty() {
            return Err(AppError::BadRequest("Series name is required".to_string()));
        }

        Ok(EbookRepository::new(self.db)
            .create_series(user_id, name)
            .await?)
    }
}
