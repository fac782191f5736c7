use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No `Authorization: Bearer <token>` header on the request.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Missing bearer token")]
    MissingToken,

    /// The bearer token failed signature, format or expiry validation.
    ///
    /// Results in a 401 Unauthorized response. The underlying reason is logged
    /// but not returned to the client.
    #[error("Invalid token: {0}")]
    InvalidToken(String),

    /// The token is valid but its user no longer exists.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("User {0} not found in database")]
    UserNotInDatabase(i32),

    /// The user lacks a required permission.
    ///
    /// Results in a 403 Forbidden response.
    #[error("User {0} lacks the required permission")]
    AccessDenied(i32),
}

/// Converts authentication errors into HTTP responses.
///
/// Maps authentication errors to appropriate HTTP status codes and user-friendly error messages:
/// - `MissingToken` / `InvalidToken` / `UserNotInDatabase` → 401 Unauthorized
/// - `AccessDenied` → 403 Forbidden
///
/// All errors are logged at debug level for diagnostics while keeping client-facing messages
/// generic to avoid information leakage.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::MissingToken | Self::InvalidToken(_) | Self::UserNotInDatabase(_) => {
                error_response(StatusCode::UNAUTHORIZED, "Unauthorized")
            }
            Self::AccessDenied(_) => error_response(StatusCode::FORBIDDEN, "Forbidden"),
        }
    }
}
