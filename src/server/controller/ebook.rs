use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{DataDto, ErrorDto, ResultDto},
        ebook::{
            CreateEbookDto, CreateEbookSeriesDto, EbookDto, EbookIdDto, EbookListItemDto,
            EbookSeriesDto, StarRateDto, StarRateResultDto, UpdateEbookDto,
        },
        page::{PageDto, PageQueryDto},
    },
    server::{
        controller::{ownership_data, ownership_result},
        error::AppError,
        middleware::auth::AuthGuard,
        model::{
            ebook::{CreateEbookParams, Ebook},
            page::PageRequest,
        },
        service::ebook::EbookService,
        state::AppState,
    },
};

/// Tag for grouping e-book endpoints in OpenAPI documentation
pub static EBOOK_TAG: &str = "ebook";

/// Get all e-books, newest first.
#[utoipa::path(
    get,
    path = "/api/ebook",
    tag = EBOOK_TAG,
    responses(
        (status = 200, description = "Successfully retrieved e-books", body = Vec<EbookListItemDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_ebooks(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    tracing::info!("GET /api/ebook");

    let ebooks = EbookService::new(&state.db).get_all().await?;

    Ok((
        StatusCode::OK,
        Json(
            ebooks
                .into_iter()
                .map(Ebook::into_list_item_dto)
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Get an e-book with its average rating.
#[utoipa::path(
    get,
    path = "/api/ebook/{ebook_id}",
    tag = EBOOK_TAG,
    params(
        ("ebook_id" = i32, Path, description = "E-book ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved e-book", body = EbookDto),
        (status = 404, description = "E-book not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_ebook(
    State(state): State<AppState>,
    Path(ebook_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    tracing::info!("GET /api/ebook/{}", ebook_id);

    let ebook = EbookService::new(&state.db).get_by_id(ebook_id).await?;

    Ok((StatusCode::OK, Json(ebook.into_dto())))
}

/// Get an e-book for editing; only its author may.
#[utoipa::path(
    get,
    path = "/api/ebook/{ebook_id}/edit",
    tag = EBOOK_TAG,
    params(
        ("ebook_id" = i32, Path, description = "E-book ID")
    ),
    responses(
        (status = 200, description = "E-book, or a user mismatch", body = DataDto<EbookDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "E-book not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_ebook_for_update(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(ebook_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    tracing::info!("GET /api/ebook/{}/edit", ebook_id);

    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let outcome = EbookService::new(&state.db)
        .get_for_update(ebook_id, user.user_id)
        .await?;

    Ok((StatusCode::OK, ownership_data(outcome, Ebook::into_dto)))
}

/// Publish an e-book.
///
/// A series, when given, must belong to the caller; otherwise the response is a
/// user mismatch and nothing is stored.
#[utoipa::path(
    post,
    path = "/api/ebook",
    tag = EBOOK_TAG,
    request_body = CreateEbookDto,
    responses(
        (status = 201, description = "E-book created, or a user mismatch", body = DataDto<EbookDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn create_ebook(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateEbookDto>,
) -> Result<impl IntoResponse, AppError> {
    tracing::info!("POST /api/ebook");

    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let outcome = EbookService::new(&state.db)
        .create(CreateEbookParams::from_dto(user.user_id, payload))
        .await?;

    Ok((StatusCode::CREATED, ownership_data(outcome, Ebook::into_dto)))
}

/// Edit an e-book; only its author may.
#[utoipa::path(
    patch,
    path = "/api/ebook",
    tag = EBOOK_TAG,
    request_body = UpdateEbookDto,
    responses(
        (status = 200, description = "E-book updated, or a user mismatch", body = ResultDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "E-book not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn update_ebook(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<UpdateEbookDto>,
) -> Result<impl IntoResponse, AppError> {
    tracing::info!("PATCH /api/ebook");

    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let outcome = EbookService::new(&state.db)
        .update(payload.into(), user.user_id)
        .await?;

    Ok(ownership_result(outcome.map(|_| ())))
}

/// Soft-delete an e-book; only its author may.
#[utoipa::path(
    delete,
    path = "/api/ebook",
    tag = EBOOK_TAG,
    request_body = EbookIdDto,
    responses(
        (status = 200, description = "E-book deleted, or a user mismatch", body = ResultDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "E-book not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn delete_ebook(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<EbookIdDto>,
) -> Result<impl IntoResponse, AppError> {
    tracing::info!("DELETE /api/ebook");

    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let outcome = EbookService::new(&state.db)
        .delete(payload.id, user.user_id)
        .await?;

    Ok(ownership_result(outcome))
}

/// Rate an e-book.
///
/// Each user holds one rating per e-book; rating again replaces the earlier value.
///
/// # Returns
/// - `200 OK` - Average and count after the change
/// - `400 Bad Request` - Rate outside 1..=5
/// - `404 Not Found` - E-book missing or deleted
#[utoipa::path(
    post,
    path = "/api/ebook/star-rating",
    tag = EBOOK_TAG,
    request_body = StarRateDto,
    responses(
        (status = 200, description = "Rating stored", body = StarRateResultDto),
        (status = 400, description = "Rate out of range", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "E-book not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn rate_ebook(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<StarRateDto>,
) -> Result<impl IntoResponse, AppError> {
    tracing::info!("POST /api/ebook/star-rating");

    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let summary = EbookService::new(&state.db)
        .rate(payload.ebook_id, user.user_id, payload.rate)
        .await?;

    Ok((StatusCode::OK, Json(summary.into_result_dto())))
}

/// Get e-books ordered by average rating, unrated last.
#[utoipa::path(
    get,
    path = "/api/ebook/star-rating",
    tag = EBOOK_TAG,
    params(PageQueryDto),
    responses(
        (status = 200, description = "Successfully retrieved e-books", body = PageDto<EbookListItemDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_ebooks_by_rating(
    State(state): State<AppState>,
    Query(query): Query<PageQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    tracing::info!("GET /api/ebook/star-rating");

    let page = EbookService::new(&state.db)
        .get_paginated_by_rating(PageRequest::from_dto(query))
        .await?;

    Ok((StatusCode::OK, Json(page.into_dto(Ebook::into_list_item_dto))))
}

/// Get the caller's series.
#[utoipa::path(
    get,
    path = "/api/ebook/series",
    tag = EBOOK_TAG,
    responses(
        (status = 200, description = "Successfully retrieved series", body = Vec<EbookSeriesDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_series(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    tracing::info!("GET /api/ebook/series");

    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let series = EbookService::new(&state.db).get_series(user.user_id).await?;

    Ok((
        StatusCode::OK,
        Json(series.into_iter().map(|s| s.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Create a series owned by the caller.
#[utoipa::path(
    post,
    path = "/api/ebook/series",
    tag = EBOOK_TAG,
    request_body = CreateEbookSeriesDto,
    responses(
        (status = 201, description = "Series created", body = EbookSeriesDto),
        (status = 400, description = "Blank series name", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn create_series(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateEbookSeriesDto>,
) -> Result<impl IntoResponse, AppError> {
    tracing::info!("POST /api/ebook/series");

    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let series = EbookService::new(&state.db)
        .create_series(user.user_id, payload.name)
        .await?;

    Ok((StatusCode::CREATED, Json(series.into_dto())))
}
