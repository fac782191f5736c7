use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EbookListItemDto {
    pub id: i32,
    pub title: String,
    pub user_id: i32,
    pub ebook_series_id: Option<i32>,
    pub date_time: DateTime<Utc>,
    /// Mean star rating, absent when nobody has rated the e-book.
    pub average_rate: Option<f64>,
    pub rate_count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EbookDto {
    pub id: i32,
    pub title: String,
    pub contents: String,
    pub user_id: i32,
    pub ebook_series_id: Option<i32>,
    pub date_time: DateTime<Utc>,
    pub is_modified: bool,
    pub average_rate: Option<f64>,
    pub rate_count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateEbookDto {
    pub title: String,
    pub contents: String,
    #[serde(default)]
    pub ebook_series_id: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEbookDto {
    pub id: i32,
    pub title: String,
    pub contents: String,
    #[serde(default)]
    pub ebook_series_id: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EbookIdDto {
    pub id: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StarRateDto {
    pub ebook_id: i32,
    /// Between 1 and 5 inclusive.
    pub rate: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StarRateResultDto {
    pub success: bool,
    pub average_rate: f64,
    pub rate_count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EbookSeriesDto {
    pub id: i32,
    pub name: String,
    pub date_time: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateEbookSeriesDto {
    pub name: String,
}
