use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, ResultDto, DUPLICATE_TITLE},
        small_talk::{
            CreateSmallSubjectDto, CreateSmallTalkDto, CreatedSmallTalkDto, QueueDto,
            QueueInsertDto, QueuePopDto, RandomSubjectDto, SmallSubjectDetailDto,
            SmallSubjectDto, SmallSubjectIdDto, SmallSubjectQueryDto,
        },
    },
    server::{
        controller::ownership_result,
        error::AppError,
        middleware::auth::AuthGuard,
        model::{
            queue::Participant,
            small_talk::{CreateSmallSubjectParams, CreateSubjectOutcome, SmallSubject},
        },
        service::small_talk::SmallTalkService,
        state::AppState,
    },
};

/// Tag for grouping small talk endpoints in OpenAPI documentation
pub static SMALL_TALK_TAG: &str = "small-talk";

/// Append a participant to the back of the pairing queue.
///
/// # Returns
/// - `200 OK` - Participant queued
/// - `401 Unauthorized` - Missing or invalid token
/// - `409 Conflict` - Queue full, or user already waiting when duplicates are disabled
#[utoipa::path(
    post,
    path = "/api/small-talk/queue",
    tag = SMALL_TALK_TAG,
    request_body = QueueInsertDto,
    responses(
        (status = 200, description = "Participant queued", body = ResultDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 409, description = "Queue policy rejected the participant", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn queue_insert(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<QueueInsertDto>,
) -> Result<impl IntoResponse, AppError> {
    tracing::info!("POST /api/small-talk/queue");

    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    state.queue.add(Participant::new(payload.user_id)).await?;

    Ok((StatusCode::OK, Json(ResultDto::ok())))
}

/// Snapshot of the pairing queue, front first. Never mutates the queue.
#[utoipa::path(
    get,
    path = "/api/small-talk/queue",
    tag = SMALL_TALK_TAG,
    responses(
        (status = 200, description = "Current queue", body = QueueDto)
    ),
)]
pub async fn queue_read_all(State(state): State<AppState>) -> impl IntoResponse {
    tracing::info!("GET /api/small-talk/queue");

    let queue = state
        .queue
        .read_all()
        .await
        .into_iter()
        .map(Participant::into_dto)
        .collect();

    (
        StatusCode::OK,
        Json(QueueDto {
            success: true,
            queue,
        }),
    )
}

/// Remove and return the front of the pairing queue.
///
/// `participant` is `null` when the queue was empty.
#[utoipa::path(
    post,
    path = "/api/small-talk/queue/pop",
    tag = SMALL_TALK_TAG,
    responses(
        (status = 200, description = "Front participant, if any", body = QueuePopDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn queue_pop(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    tracing::info!("POST /api/small-talk/queue/pop");

    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let participant = state.queue.pop_left().await;
    if participant.is_none() {
        tracing::debug!("Pairing queue pop on empty queue");
    }

    Ok((
        StatusCode::OK,
        Json(QueuePopDto {
            success: true,
            participant: participant.map(Participant::into_dto),
        }),
    ))
}

/// Queue the caller for random pairing under their verified identity.
#[utoipa::path(
    post,
    path = "/api/small-talk/queue/random",
    tag = SMALL_TALK_TAG,
    responses(
        (status = 200, description = "Caller queued", body = ResultDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 409, description = "Queue policy rejected the caller", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn queue_random(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    tracing::info!("POST /api/small-talk/queue/random");

    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    state
        .queue
        .add(Participant::with_username(user.user_id, user.username))
        .await?;

    Ok((StatusCode::OK, Json(ResultDto::ok())))
}

/// List subjects, newest first, optionally filtered by a title substring.
#[utoipa::path(
    get,
    path = "/api/small-talk/subject",
    tag = SMALL_TALK_TAG,
    params(SmallSubjectQueryDto),
    responses(
        (status = 200, description = "Successfully retrieved subjects", body = Vec<SmallSubjectDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_subjects(
    State(state): State<AppState>,
    Query(query): Query<SmallSubjectQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    tracing::info!("GET /api/small-talk/subject");

    let subjects = SmallTalkService::new(&state.db)
        .list_subjects(query.title.as_deref())
        .await?;

    Ok((
        StatusCode::OK,
        Json(
            subjects
                .into_iter()
                .map(SmallSubject::into_dto)
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Get a subject with its talks.
#[utoipa::path(
    get,
    path = "/api/small-talk/subject/{subject_id}",
    tag = SMALL_TALK_TAG,
    params(
        ("subject_id" = i32, Path, description = "Subject ID")
    ),
    responses(
        (status = 200, description = "Subject and talks", body = SmallSubjectDetailDto),
        (status = 404, description = "Subject not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_subject(
    State(state): State<AppState>,
    Path(subject_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    tracing::info!("GET /api/small-talk/subject/{}", subject_id);

    let detail = SmallTalkService::new(&state.db)
        .get_subject(subject_id)
        .await?;

    Ok((StatusCode::OK, Json(detail.into_dto())))
}

/// Open a subject.
///
/// Titles are unique across all subjects, deleted ones included. A taken title is
/// reported as `{success: false, msg: "duplicate title"}`.
#[utoipa::path(
    post,
    path = "/api/small-talk/subject",
    tag = SMALL_TALK_TAG,
    request_body = CreateSmallSubjectDto,
    responses(
        (status = 201, description = "Subject created", body = ResultDto),
        (status = 200, description = "Title already taken", body = ResultDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn create_subject(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateSmallSubjectDto>,
) -> Result<impl IntoResponse, AppError> {
    tracing::info!("POST /api/small-talk/subject");

    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let outcome = SmallTalkService::new(&state.db)
        .create_subject(CreateSmallSubjectParams::from_dto(user.user_id, payload))
        .await?;

    Ok(match outcome {
        CreateSubjectOutcome::Created(_) => (StatusCode::CREATED, Json(ResultDto::ok())),
        CreateSubjectOutcome::DuplicateTitle => {
            (StatusCode::OK, Json(ResultDto::failure(DUPLICATE_TITLE)))
        }
    })
}

/// Soft-delete a subject; only its creator may.
#[utoipa::path(
    delete,
    path = "/api/small-talk/subject",
    tag = SMALL_TALK_TAG,
    request_body = SmallSubjectIdDto,
    responses(
        (status = 200, description = "Subject deleted, or a user mismatch", body = ResultDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Subject not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn delete_subject(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<SmallSubjectIdDto>,
) -> Result<impl IntoResponse, AppError> {
    tracing::info!("DELETE /api/small-talk/subject");

    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let outcome = SmallTalkService::new(&state.db)
        .delete_subject(payload.id, user.user_id)
        .await?;

    Ok(ownership_result(outcome))
}

/// Post a talk under a subject; echoes the verified author.
#[utoipa::path(
    post,
    path = "/api/small-talk/talk",
    tag = SMALL_TALK_TAG,
    request_body = CreateSmallTalkDto,
    responses(
        (status = 201, description = "Talk stored", body = CreatedSmallTalkDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Subject not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn create_talk(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateSmallTalkDto>,
) -> Result<impl IntoResponse, AppError> {
    tracing::info!("POST /api/small-talk/talk");

    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let id = SmallTalkService::new(&state.db)
        .create_talk(payload.small_subject_id, user.user_id, payload.contents)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedSmallTalkDto {
            success: true,
            id,
            user_id: user.user_id,
            username: user.username,
        }),
    ))
}

/// Draw a conversation starter uniformly at random.
#[utoipa::path(
    get,
    path = "/api/small-talk/random-subject",
    tag = SMALL_TALK_TAG,
    responses(
        (status = 200, description = "A random subject", body = RandomSubjectDto),
        (status = 404, description = "No random subjects stored", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_random_subject(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    tracing::info!("GET /api/small-talk/random-subject");

    let subject = SmallTalkService::new(&state.db).random_subject().await?;

    Ok((StatusCode::OK, Json(subject.into_dto())))
}
