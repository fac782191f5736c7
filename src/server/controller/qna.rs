use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{DataDto, ErrorDto, ResultDto},
        page::{PageDto, PageQueryDto},
        qna::{CreateQnaDto, QnaDto, QnaIdDto, QnaListItemDto, UpdateQnaDto},
    },
    server::{
        controller::{ownership_data, ownership_result},
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{
            page::PageRequest,
            qna::{CreateQnaParams, Qna},
        },
        service::qna::QnaService,
        state::AppState,
    },
};

/// Tag for grouping Q&A endpoints in OpenAPI documentation
pub static QNA_TAG: &str = "qna";

/// Get paginated Q&A entries.
///
/// Secret entries are listed with their title only; contents require the author
/// or an admin.
#[utoipa::path(
    get,
    path = "/api/qna",
    tag = QNA_TAG,
    params(PageQueryDto),
    responses(
        (status = 200, description = "Successfully retrieved entries", body = PageDto<QnaListItemDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_qnas(
    State(state): State<AppState>,
    Query(query): Query<PageQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    tracing::info!("GET /api/qna");

    let page = QnaService::new(&state.db)
        .get_paginated(PageRequest::from_dto(query))
        .await?;

    Ok((StatusCode::OK, Json(page.into_dto(Qna::into_list_item_dto))))
}

/// Ask a question as the token's user.
#[utoipa::path(
    post,
    path = "/api/qna",
    tag = QNA_TAG,
    request_body = CreateQnaDto,
    responses(
        (status = 201, description = "Entry created", body = QnaDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn create_qna(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateQnaDto>,
) -> Result<impl IntoResponse, AppError> {
    tracing::info!("POST /api/qna");

    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let qna = QnaService::new(&state.db)
        .create(CreateQnaParams::from_dto(user.user_id, user.username, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(qna.into_dto())))
}

/// Get a Q&A entry.
///
/// # Access Control
/// - Public entries are visible to any signed-in user
/// - Secret entries are visible to their author; others receive a user mismatch
#[utoipa::path(
    get,
    path = "/api/qna/{qna_id}",
    tag = QNA_TAG,
    params(
        ("qna_id" = i32, Path, description = "Q&A entry ID")
    ),
    responses(
        (status = 200, description = "Entry, or a user mismatch", body = DataDto<QnaDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Entry not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_qna(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(qna_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    tracing::info!("GET /api/qna/{}", qna_id);

    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let outcome = QnaService::new(&state.db)
        .get_by_id(qna_id, user.user_id)
        .await?;

    Ok((StatusCode::OK, ownership_data(outcome, Qna::into_dto)))
}

/// Get any Q&A entry, secret or not.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    get,
    path = "/api/qna/{qna_id}/admin",
    tag = QNA_TAG,
    params(
        ("qna_id" = i32, Path, description = "Q&A entry ID")
    ),
    responses(
        (status = 200, description = "Entry", body = QnaDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Entry not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_qna_as_admin(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(qna_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    tracing::info!("GET /api/qna/{}/admin", qna_id);

    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Admin])
        .await?;

    let qna = QnaService::new(&state.db).get_by_id_as_admin(qna_id).await?;

    Ok((StatusCode::OK, Json(qna.into_dto())))
}

/// Get a Q&A entry for editing; only its author may.
#[utoipa::path(
    get,
    path = "/api/qna/{qna_id}/edit",
    tag = QNA_TAG,
    params(
        ("qna_id" = i32, Path, description = "Q&A entry ID")
    ),
    responses(
        (status = 200, description = "Entry, or a user mismatch", body = DataDto<QnaDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Entry not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_qna_for_update(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(qna_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    tracing::info!("GET /api/qna/{}/edit", qna_id);

    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let outcome = QnaService::new(&state.db)
        .get_for_update(qna_id, user.user_id)
        .await?;

    Ok((StatusCode::OK, ownership_data(outcome, Qna::into_dto)))
}

/// Edit a Q&A entry; only its author may.
#[utoipa::path(
    patch,
    path = "/api/qna",
    tag = QNA_TAG,
    request_body = UpdateQnaDto,
    responses(
        (status = 200, description = "Entry updated, or a user mismatch", body = ResultDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Entry not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn update_qna(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<UpdateQnaDto>,
) -> Result<impl IntoResponse, AppError> {
    tracing::info!("PATCH /api/qna");

    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let outcome = QnaService::new(&state.db)
        .update(payload.into(), user.user_id)
        .await?;

    Ok(ownership_result(outcome.map(|_| ())))
}

/// Soft-delete a Q&A entry; only its author may.
#[utoipa::path(
    delete,
    path = "/api/qna",
    tag = QNA_TAG,
    request_body = QnaIdDto,
    responses(
        (status = 200, description = "Entry deleted, or a user mismatch", body = ResultDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Entry not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn delete_qna(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<QnaIdDto>,
) -> Result<impl IntoResponse, AppError> {
    tracing::info!("DELETE /api/qna");

    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let outcome = QnaService::new(&state.db)
        .delete(payload.id, user.user_id)
        .await?;

    Ok(ownership_result(outcome))
}
