use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, ResultDto},
        comment::{CommentIdDto, CreateCommentDto, UpdateCommentDto},
    },
    server::{
        controller::ownership_result, error::AppError, middleware::auth::AuthGuard,
        service::comment::CommentService, state::AppState,
    },
};

/// Tag for grouping comment endpoints in OpenAPI documentation
pub static COMMENT_TAG: &str = "comment";

/// Comment on a board as the token's user.
#[utoipa::path(
    post,
    path = "/api/comment",
    tag = COMMENT_TAG,
    request_body = CreateCommentDto,
    responses(
        (status = 201, description = "Comment created", body = ResultDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Board not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn create_comment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateCommentDto>,
) -> Result<impl IntoResponse, AppError> {
    tracing::info!("POST /api/comment");

    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    CommentService::new(&state.db)
        .create(payload.board_id, user.user_id, payload.contents)
        .await?;

    Ok((StatusCode::CREATED, Json(ResultDto::ok())))
}

/// Edit a comment; only its author may.
#[utoipa::path(
    patch,
    path = "/api/comment",
    tag = COMMENT_TAG,
    request_body = UpdateCommentDto,
    responses(
        (status = 200, description = "Comment updated, or a user mismatch", body = ResultDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Comment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn update_comment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<UpdateCommentDto>,
) -> Result<impl IntoResponse, AppError> {
    tracing::info!("PATCH /api/comment");

    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let outcome = CommentService::new(&state.db)
        .update(payload.id, user.user_id, payload.contents)
        .await?;

    Ok(ownership_result(outcome))
}

/// Soft-delete a comment; only its author may.
#[utoipa::path(
    delete,
    path = "/api/comment",
    tag = COMMENT_TAG,
    request_body = CommentIdDto,
    responses(
        (status = 200, description = "Comment deleted, or a user mismatch", body = ResultDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Comment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn delete_comment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CommentIdDto>,
) -> Result<impl IntoResponse, AppError> {
    tracing::info!("DELETE /api/comment");

    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let outcome = CommentService::new(&state.db)
        .delete(payload.id, user.user_id)
        .await?;

    Ok(ownership_result(outcome))
}
