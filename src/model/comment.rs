use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CommentDto {
    pub id: i32,
    pub contents: String,
    pub date_time: DateTime<Utc>,
    pub is_modified: bool,
    pub user_id: i32,
    pub nickname: String,
    pub img: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommentDto {
    pub board_id: i32,
    pub contents: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateCommentDto {
    pub id: i32,
    pub contents: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CommentIdDto {
    pub id: i32,
}
