//! E-book catalog domain models.
//!
//! Ratings are aggregated in Rust from the `ebook_star_rate` rows; an e-book nobody
//! has rated has no average rather than an average of zero.

use chrono::{DateTime, Utc};

use crate::model::ebook::{
    CreateEbookDto, EbookDto, EbookListItemDto, EbookSeriesDto, StarRateResultDto, UpdateEbookDto,
};

pub const MIN_RATE: i32 = 1;
pub const MAX_RATE: i32 = 5;

/// Aggregate of an e-book's star ratings.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RatingSummary {
    pub average: Option<f64>,
    pub count: u64,
}

impl RatingSummary {
    /// Summarizes a set of individual ratings.
    pub fn from_rates(rates: &[i32]) -> Self {
        if rates.is_empty() {
            return Self::default();
        }

        let sum: i64 = rates.iter().map(|r| *r as i64).sum();
        Self {
            average: Some(sum as f64 / rates.len() as f64),
            count: rates.len() as u64,
        }
    }

    pub fn into_result_dto(self) -> StarRateResultDto {
        StarRateResultDto {
            success: true,
            average_rate: self.average.unwrap_or(0.0),
            rate_count: self.count,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Ebook {
    pub id: i32,
    pub title: String,
    pub contents: String,
    pub user_id: i32,
    pub ebook_series_id: Option<i32>,
    pub date_time: DateTime<Utc>,
    pub is_modified: bool,
    pub rating: RatingSummary,
}

impl Ebook {
    pub fn from_entity(entity: entity::ebook::Model, rating: RatingSummary) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            contents: entity.contents,
            user_id: entity.user_id,
            ebook_series_id: entity.ebook_series_id,
            date_time: entity.date_time,
            is_modified: entity.is_modified,
            rating,
        }
    }

    pub fn into_dto(self) -> EbookDto {
        EbookDto {
            id: self.id,
            title: self.title,
            contents: self.contents,
            user_id: self.user_id,
            ebook_series_id: self.ebook_series_id,
            date_time: self.date_time,
            is_modified: self.is_modified,
            average_rate: self.rating.average,
            rate_count: self.rating.count,
        }
    }

    pub fn into_list_item_dto(self) -> EbookListItemDto {
        EbookListItemDto {
            id: self.id,
            title: self.title,
            user_id: self.user_id,
            ebook_series_id: self.ebook_series_id,
            date_time: self.date_time,
            average_rate: self.rating.average,
            rate_count: self.rating.count,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EbookSeries {
    pub id: i32,
    pub name: String,
    pub date_time: DateTime<Utc>,
}

impl EbookSeries {
    pub fn from_entity(entity: entity::ebook_series::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            date_time: entity.date_time,
        }
    }

    pub fn into_dto(self) -> EbookSeriesDto {
        EbookSeriesDto {
            id: self.id,
            name: self.name,
            date_time: self.date_time,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateEbookParams {
    pub user_id: i32,
    pub title: String,
    pub contents: String,
    pub ebook_series_id: Option<i32>,
}

impl CreateEbookParams {
    pub fn from_dto(user_id: i32, dto: CreateEbookDto) -> Self {
        Self {
            user_id,
            title: dto.title,
            contents: dto.contents,
            ebook_series_id: dto.ebook_series_id,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpdateEbookParams {
    pub id: i32,
    pub title: String,
    pub contents: String,
    pub ebook_series_id: Option<i32>,
}

impl From<UpdateEbookDto> for UpdateEbookParams {
    fn from(dto: UpdateEbookDto) -> Self {
        Self {
            id: dto.id,
            title: dto.title,
            contents: dto.contents,
            ebook_series_id: dto.ebook_series_id,
        }
    }
}
