use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NotifyDto {
    pub id: i32,
    pub reason: String,
    pub date_time: DateTime<Utc>,
    pub board_id: i32,
    pub board_title: String,
    /// Id of the reporting user.
    pub user_id: i32,
    pub is_checked: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateNotifyDto {
    pub board_id: i32,
    pub reason: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BanBoardDto {
    pub board_id: i32,
    pub board_notify_id: i32,
}
