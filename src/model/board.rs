use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BoardListItemDto {
    pub id: i32,
    pub title: String,
    pub date_time: DateTime<Utc>,
    pub category: String,
    pub nickname: String,
    pub recommend_count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BoardDetailDto {
    pub id: i32,
    pub title: String,
    pub contents: String,
    pub date_time: DateTime<Utc>,
    pub is_modified: bool,
    pub board_category_id: i32,
    pub category: String,
    pub user_id: i32,
    pub nickname: String,
    pub img: Option<String>,
    pub recommend_count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BoardCategoryDto {
    pub id: i32,
    pub category: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBoardDto {
    pub title: String,
    pub contents: String,
    pub board_category_id: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBoardDto {
    pub id: i32,
    pub title: String,
    pub contents: String,
    pub board_category_id: i32,
}

/// Identifies a board by id in request bodies (delete, recommend).
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BoardIdDto {
    pub board_id: i32,
}

/// Result of the recommend toggle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RecommendDto {
    pub success: bool,
    pub msg: String,
    /// Number of users currently recommending the board.
    pub recommend: u64,
}
