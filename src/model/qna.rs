use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QnaListItemDto {
    pub id: i32,
    pub title: String,
    pub username: Option<String>,
    pub date_time: DateTime<Utc>,
    pub is_secret: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QnaDto {
    pub id: i32,
    pub title: String,
    pub contents: String,
    pub user_id: i32,
    pub username: Option<String>,
    pub date_time: DateTime<Utc>,
    pub is_secret: bool,
    pub is_modified: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateQnaDto {
    pub title: String,
    pub contents: String,
    #[serde(default)]
    pub is_secret: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateQnaDto {
    pub id: i32,
    pub title: String,
    pub contents: String,
    #[serde(default)]
    pub is_secret: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QnaIdDto {
    pub id: i32,
}
