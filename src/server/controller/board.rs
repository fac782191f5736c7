use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{DataDto, ErrorDto, ResultDto},
        board::{
            BoardCategoryDto, BoardDetailDto, BoardIdDto, BoardListItemDto, CreateBoardDto,
            RecommendDto, UpdateBoardDto,
        },
        comment::CommentDto,
        page::{PageDto, PageQueryDto},
    },
    server::{
        controller::{ownership_data, ownership_result},
        error::AppError,
        middleware::auth::AuthGuard,
        model::{
            board::{BoardDetail, BoardListItem, CreateBoardParams, SearchScope},
            comment::Comment,
            page::PageRequest,
        },
        service::{board::BoardService, comment::CommentService, recommend::RecommendService},
        state::AppState,
    },
};

/// Tag for grouping board endpoints in OpenAPI documentation
pub static BOARD_TAG: &str = "board";

/// Get paginated boards.
///
/// Returns visible boards (not deleted, not banned), newest first, with category,
/// author nickname and recommend count.
///
/// # Returns
/// - `200 OK` - One page of boards
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/board",
    tag = BOARD_TAG,
    params(PageQueryDto),
    responses(
        (status = 200, description = "Successfully retrieved boards", body = PageDto<BoardListItemDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_boards(
    State(state): State<AppState>,
    Query(query): Query<PageQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    tracing::info!("GET /api/board");

    let page = BoardService::new(&state.db)
        .get_paginated(PageRequest::from_dto(query))
        .await?;

    Ok((StatusCode::OK, Json(page.into_dto(BoardListItem::into_dto))))
}

/// Get all board categories.
#[utoipa::path(
    get,
    path = "/api/board/category",
    tag = BOARD_TAG,
    responses(
        (status = 200, description = "Successfully retrieved categories", body = Vec<BoardCategoryDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_categories(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    tracing::info!("GET /api/board/category");

    let categories = BoardService::new(&state.db).categories().await?;

    Ok((
        StatusCode::OK,
        Json(
            categories
                .into_iter()
                .map(|c| c.into_dto())
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Get paginated boards in one category.
#[utoipa::path(
    get,
    path = "/api/board/category/{category_id}",
    tag = BOARD_TAG,
    params(
        ("category_id" = i32, Path, description = "Board category ID"),
        PageQueryDto
    ),
    responses(
        (status = 200, description = "Successfully retrieved boards", body = PageDto<BoardListItemDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_boards_by_category(
    State(state): State<AppState>,
    Path(category_id): Path<i32>,
    Query(query): Query<PageQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    tracing::info!("GET /api/board/category/{}", category_id);

    let page = BoardService::new(&state.db)
        .get_paginated_by_category(category_id, PageRequest::from_dto(query))
        .await?;

    Ok((StatusCode::OK, Json(page.into_dto(BoardListItem::into_dto))))
}

/// Search boards.
///
/// Splits `keyword` on whitespace; a board matches when any word appears in any
/// column covered by `scope` (`all`, `title` or `contents`).
///
/// # Returns
/// - `200 OK` - One page of matching boards
/// - `400 Bad Request` - Unknown scope
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/board/search/{scope}",
    tag = BOARD_TAG,
    params(
        ("scope" = String, Path, description = "all, title or contents"),
        PageQueryDto
    ),
    responses(
        (status = 200, description = "Successfully searched boards", body = PageDto<BoardListItemDto>),
        (status = 400, description = "Unknown search scope", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search_boards(
    State(state): State<AppState>,
    Path(scope): Path<String>,
    Query(query): Query<PageQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    tracing::info!("GET /api/board/search/{}", scope);

    let scope = scope.parse::<SearchScope>().map_err(AppError::BadRequest)?;

    let page = BoardService::new(&state.db)
        .search(scope, PageRequest::from_dto(query))
        .await?;

    Ok((StatusCode::OK, Json(page.into_dto(BoardListItem::into_dto))))
}

/// Get the five newest boards.
#[utoipa::path(
    get,
    path = "/api/board/latest",
    tag = BOARD_TAG,
    responses(
        (status = 200, description = "Successfully retrieved latest boards", body = Vec<BoardListItemDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_latest_boards(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    tracing::info!("GET /api/board/latest");

    let boards = BoardService::new(&state.db).latest().await?;

    Ok((
        StatusCode::OK,
        Json(
            boards
                .into_iter()
                .map(BoardListItem::into_dto)
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Get the caller's own boards.
///
/// # Access Control
/// - Any signed-in user
#[utoipa::path(
    get,
    path = "/api/board/mine",
    tag = BOARD_TAG,
    params(PageQueryDto),
    responses(
        (status = 200, description = "Successfully retrieved boards", body = PageDto<BoardListItemDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_my_boards(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<PageQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    tracing::info!("GET /api/board/mine");

    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let page = BoardService::new(&state.db)
        .get_mine(user.user_id, PageRequest::from_dto(query))
        .await?;

    Ok((StatusCode::OK, Json(page.into_dto(BoardListItem::into_dto))))
}

/// Get boards the caller currently recommends.
///
/// # Access Control
/// - Any signed-in user
#[utoipa::path(
    get,
    path = "/api/board/liked",
    tag = BOARD_TAG,
    params(PageQueryDto),
    responses(
        (status = 200, description = "Successfully retrieved boards", body = PageDto<BoardListItemDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_liked_boards(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<PageQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    tracing::info!("GET /api/board/liked");

    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let page = BoardService::new(&state.db)
        .get_liked(user.user_id, PageRequest::from_dto(query))
        .await?;

    Ok((StatusCode::OK, Json(page.into_dto(BoardListItem::into_dto))))
}

/// Get a board by ID.
///
/// # Returns
/// - `200 OK` - Board details with recommend count
/// - `404 Not Found` - Board missing, deleted or banned
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/board/{board_id}",
    tag = BOARD_TAG,
    params(
        ("board_id" = i32, Path, description = "Board ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved board", body = BoardDetailDto),
        (status = 404, description = "Board not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_board(
    State(state): State<AppState>,
    Path(board_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    tracing::info!("GET /api/board/{}", board_id);

    let board = BoardService::new(&state.db).get_by_id(board_id).await?;

    Ok((StatusCode::OK, Json(board.into_dto())))
}

/// Get a board for editing.
///
/// # Access Control
/// - Board author; anyone else receives `{success: false, msg: "user mismatch"}`
#[utoipa::path(
    get,
    path = "/api/board/{board_id}/edit",
    tag = BOARD_TAG,
    params(
        ("board_id" = i32, Path, description = "Board ID")
    ),
    responses(
        (status = 200, description = "Board details, or a user mismatch", body = DataDto<BoardDetailDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Board not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_board_for_update(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(board_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    tracing::info!("GET /api/board/{}/edit", board_id);

    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let outcome = BoardService::new(&state.db)
        .get_for_update(board_id, user.user_id)
        .await?;

    Ok((StatusCode::OK, ownership_data(outcome, BoardDetail::into_dto)))
}

/// Create a board.
///
/// # Access Control
/// - Any signed-in user; the board is owned by the token's user
///
/// # Returns
/// - `201 Created` - Board created
/// - `400 Bad Request` - Unknown category
/// - `401 Unauthorized` - Missing or invalid token
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/board",
    tag = BOARD_TAG,
    request_body = CreateBoardDto,
    responses(
        (status = 201, description = "Successfully created board", body = ResultDto),
        (status = 400, description = "Unknown category", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn create_board(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateBoardDto>,
) -> Result<impl IntoResponse, AppError> {
    tracing::info!("POST /api/board");

    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    BoardService::new(&state.db)
        .create(CreateBoardParams::from_dto(user.user_id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(ResultDto::ok())))
}

/// Update a board.
///
/// # Access Control
/// - Board author; anyone else receives a user mismatch and nothing changes
#[utoipa::path(
    patch,
    path = "/api/board",
    tag = BOARD_TAG,
    request_body = UpdateBoardDto,
    responses(
        (status = 200, description = "Board updated, or a user mismatch", body = ResultDto),
        (status = 400, description = "Unknown category", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Board not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn update_board(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<UpdateBoardDto>,
) -> Result<impl IntoResponse, AppError> {
    tracing::info!("PATCH /api/board");

    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let outcome = BoardService::new(&state.db)
        .update(payload.into(), user.user_id)
        .await?;

    Ok(ownership_result(outcome))
}

/// Soft-delete a board.
///
/// # Access Control
/// - Board author; anyone else receives a user mismatch and nothing changes
#[utoipa::path(
    delete,
    path = "/api/board",
    tag = BOARD_TAG,
    request_body = BoardIdDto,
    responses(
        (status = 200, description = "Board deleted, or a user mismatch", body = ResultDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Board not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn delete_board(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<BoardIdDto>,
) -> Result<impl IntoResponse, AppError> {
    tracing::info!("DELETE /api/board");

    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let outcome = BoardService::new(&state.db)
        .delete(payload.board_id, user.user_id)
        .await?;

    Ok(ownership_result(outcome))
}

/// Toggle the caller's recommendation of a board.
///
/// First call recommends, the next cancels, the next recommends again. The response
/// carries the transition message and the board's recommend count after the change.
///
/// # Access Control
/// - Any signed-in user
///
/// # Returns
/// - `200 OK` - `{success: true, msg, recommend}`
/// - `401 Unauthorized` - Missing or invalid token
/// - `404 Not Found` - Board missing, deleted or banned
/// - `500 Internal Server Error` - Storage failure, nothing was written
#[utoipa::path(
    post,
    path = "/api/board/recommend",
    tag = BOARD_TAG,
    request_body = BoardIdDto,
    responses(
        (status = 200, description = "Recommendation toggled", body = RecommendDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Board not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn recommend_board(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<BoardIdDto>,
) -> Result<impl IntoResponse, AppError> {
    tracing::info!("POST /api/board/recommend");

    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let outcome = RecommendService::new(&state.db)
        .toggle(payload.board_id, user.user_id)
        .await?;

    Ok((StatusCode::OK, Json(outcome.into_dto())))
}

/// Get a board's comments, newest first.
#[utoipa::path(
    get,
    path = "/api/board/{board_id}/comments",
    tag = BOARD_TAG,
    params(
        ("board_id" = i32, Path, description = "Board ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved comments", body = Vec<CommentDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_board_comments(
    State(state): State<AppState>,
    Path(board_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    tracing::info!("GET /api/board/{}/comments", board_id);

    let comments = CommentService::new(&state.db)
        .get_by_board(board_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(
            comments
                .into_iter()
                .map(Comment::into_dto)
                .collect::<Vec<_>>(),
        ),
    ))
}
