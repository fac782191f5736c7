use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// A participant waiting in the pairing queue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantDto {
    pub user_id: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

/// Body of the raw queue insert endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QueueInsertDto {
    pub user_id: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct QueuePopDto {
    pub success: bool,
    /// Front of the queue, `null` when the queue was empty.
    pub participant: Option<ParticipantDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct QueueDto {
    pub success: bool,
    pub queue: Vec<ParticipantDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SmallSubjectDto {
    pub id: i32,
    pub title: String,
    pub detail: String,
    pub img_url: Option<String>,
    pub date_time: DateTime<Utc>,
    pub user_id: i32,
    pub nickname: String,
    pub user_img: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SmallTalkDto {
    pub id: i32,
    pub contents: String,
    pub date_time: DateTime<Utc>,
    pub user_id: i32,
    pub nickname: String,
}

/// A subject together with its talks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SmallSubjectDetailDto {
    pub sub: SmallSubjectDto,
    pub list: Vec<SmallTalkDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateSmallSubjectDto {
    pub title: String,
    pub detail: String,
    #[serde(default)]
    pub img_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SmallSubjectIdDto {
    pub id: i32,
}

#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SmallSubjectQueryDto {
    /// Substring of the subject title to filter by.
    #[serde(default)]
    pub title: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateSmallTalkDto {
    pub small_subject_id: i32,
    pub contents: String,
}

/// Echo of a stored talk together with the verified author.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatedSmallTalkDto {
    pub success: bool,
    pub id: i32,
    pub user_id: i32,
    pub username: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RandomSubjectDto {
    pub id: i32,
    pub subject: String,
}
