//! HTTP request handlers.
//!
//! Controllers authenticate the caller with `AuthGuard`, convert DTOs into service
//! parameters, call a service and convert the domain result back into a DTO. Each
//! handler logs its route on entry.

pub mod board;
pub mod comment;
pub mod ebook;
pub mod health;
pub mod notify;
pub mod qna;
pub mod small_talk;

use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::api::{DataDto, ResultDto},
    server::model::Ownership,
};

/// Renders an ownership-checked write as a `ResultDto`.
pub(crate) fn ownership_result(outcome: Ownership<()>) -> impl IntoResponse {
    let body = match outcome {
        Ownership::Owner(()) => ResultDto::ok(),
        Ownership::NotOwner => ResultDto::user_mismatch(),
    };

    (StatusCode::OK, Json(body))
}

/// Renders an ownership-checked read as a `DataDto`.
pub(crate) fn ownership_data<T, D>(
    outcome: Ownership<T>,
    into_dto: impl FnOnce(T) -> D,
) -> Json<DataDto<D>> {
    match outcome {
        Ownership::Owner(value) => Json(DataDto::ok(into_dto(value))),
        Ownership::NotOwner => Json(DataDto::user_mismatch()),
    }
}
