use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, ResultDto},
        notify::{BanBoardDto, CreateNotifyDto, NotifyDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::notify::Notify,
        service::notify::NotifyService,
        state::AppState,
    },
};

/// Tag for grouping moderation endpoints in OpenAPI documentation
pub static REPORT_TAG: &str = "report";

/// Report a board.
#[utoipa::path(
    post,
    path = "/api/report",
    tag = REPORT_TAG,
    request_body = CreateNotifyDto,
    responses(
        (status = 201, description = "Report filed", body = ResultDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Board not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn report_board(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateNotifyDto>,
) -> Result<impl IntoResponse, AppError> {
    tracing::info!("POST /api/report");

    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    NotifyService::new(&state.db)
        .report(payload.board_id, user.user_id, payload.reason)
        .await?;

    Ok((StatusCode::CREATED, Json(ResultDto::ok())))
}

/// Get unresolved reports.
///
/// # Access Control
/// - `Admin` - Only admins can review reports
#[utoipa::path(
    get,
    path = "/api/report",
    tag = REPORT_TAG,
    responses(
        (status = 200, description = "Pending reports", body = Vec<NotifyDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_pending_reports(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    tracing::info!("GET /api/report");

    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Admin])
        .await?;

    let reports = NotifyService::new(&state.db).get_pending().await?;

    Ok((
        StatusCode::OK,
        Json(reports.into_iter().map(Notify::into_dto).collect::<Vec<_>>()),
    ))
}

/// Ban a reported board and resolve the report.
///
/// # Access Control
/// - `Admin` - Only admins can ban boards
///
/// # Returns
/// - `200 OK` - Board banned
/// - `400 Bad Request` - Report was filed against another board; nothing changed
/// - `404 Not Found` - Board or pending report missing; nothing changed
#[utoipa::path(
    post,
    path = "/api/report/ban",
    tag = REPORT_TAG,
    request_body = BanBoardDto,
    responses(
        (status = 200, description = "Board banned", body = ResultDto),
        (status = 400, description = "Report does not belong to the board", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Board or report not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn ban_board(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<BanBoardDto>,
) -> Result<impl IntoResponse, AppError> {
    tracing::info!("POST /api/report/ban");

    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Admin])
        .await?;

    NotifyService::new(&state.db)
        .ban(payload.board_id, payload.board_notify_id)
        .await?;

    Ok((StatusCode::OK, Json(ResultDto::ok())))
}
