use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Message returned when the caller does not own the resource they tried to change.
pub const USER_MISMATCH: &str = "user mismatch";

/// Message returned when a small talk subject title is already taken.
pub const DUPLICATE_TITLE: &str = "duplicate title";

/// Error envelope returned with every non-2xx response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    /// HTTP status code, repeated in the body.
    pub status: u16,
    pub error: String,
    /// Always `false`.
    pub success: bool,
}

impl ErrorDto {
    pub fn new(status: u16, error: impl Into<String>) -> Self {
        Self {
            status,
            error: error.into(),
            success: false,
        }
    }
}

/// Plain success/failure envelope.
///
/// Ownership mismatches and duplicate titles are reported with `success: false`
/// and HTTP 200 rather than an error status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ResultDto {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub msg: Option<String>,
}

impl ResultDto {
    pub fn ok() -> Self {
        Self {
            success: true,
            msg: None,
        }
    }

    pub fn failure(msg: impl Into<String>) -> Self {
        Self {
            success: false,
            msg: Some(msg.into()),
        }
    }

    pub fn user_mismatch() -> Self {
        Self::failure(USER_MISMATCH)
    }
}

/// Response for read endpoints that can also fail softly on ownership.
///
/// `data` is present on success; `msg` carries the soft failure reason.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DataDto<T> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub msg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> DataDto<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            msg: None,
            data: Some(data),
        }
    }

    pub fn user_mismatch() -> Self {
        Self {
            success: false,
            msg: Some(USER_MISMATCH.to_string()),
            data: None,
        }
    }
}

/// Liveness response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthDto {
    pub status: String,
}
