use axum::{
    routing::{get, post},
    Router,
};
use utoipa::{
    openapi::security::{Http, HttpAuthScheme, SecurityScheme},
    Modify, OpenApi,
};

use crate::{
    model::{
        api::{DataDto, ErrorDto, HealthDto, ResultDto},
        board::{
            BoardCategoryDto, BoardDetailDto, BoardIdDto, BoardListItemDto, CreateBoardDto,
            RecommendDto, UpdateBoardDto,
        },
        comment::{CommentDto, CommentIdDto, CreateCommentDto, UpdateCommentDto},
        ebook::{
            CreateEbookDto, CreateEbookSeriesDto, EbookDto, EbookIdDto, EbookListItemDto,
            EbookSeriesDto, StarRateDto, StarRateResultDto, UpdateEbookDto,
        },
        notify::{BanBoardDto, CreateNotifyDto, NotifyDto},
        page::PageDto,
        qna::{CreateQnaDto, QnaDto, QnaIdDto, QnaListItemDto, UpdateQnaDto},
        small_talk::{
            CreateSmallSubjectDto, CreateSmallTalkDto, CreatedSmallTalkDto, ParticipantDto,
            QueueDto, QueueInsertDto, QueuePopDto, RandomSubjectDto, SmallSubjectDetailDto,
            SmallSubjectDto, SmallSubjectIdDto, SmallTalkDto,
        },
    },
    server::{
        controller::{board, comment, ebook, health, notify, qna, small_talk},
        state::AppState,
    },
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/health", get(health::health))
        .route(
            "/api/board",
            get(board::get_boards)
                .post(board::create_board)
                .patch(board::update_board)
                .delete(board::delete_board),
        )
        .route("/api/board/category", get(board::get_categories))
        .route(
            "/api/board/category/{category_id}",
            get(board::get_boards_by_category),
        )
        .route("/api/board/search/{scope}", get(board::search_boards))
        .route("/api/board/latest", get(board::get_latest_boards))
        .route("/api/board/mine", get(board::get_my_boards))
        .route("/api/board/liked", get(board::get_liked_boards))
        .route("/api/board/recommend", post(board::recommend_board))
        .route("/api/board/{board_id}", get(board::get_board))
        .route("/api/board/{board_id}/edit", get(board::get_board_for_update))
        .route(
            "/api/board/{board_id}/comments",
            get(board::get_board_comments),
        )
        .route(
            "/api/comment",
            post(comment::create_comment)
                .patch(comment::update_comment)
                .delete(comment::delete_comment),
        )
        .route(
            "/api/report",
            get(notify::get_pending_reports).post(notify::report_board),
        )
        .route("/api/report/ban", post(notify::ban_board))
        .route(
            "/api/qna",
            get(qna::get_qnas)
                .post(qna::create_qna)
                .patch(qna::update_qna)
                .delete(qna::delete_qna),
        )
        .route("/api/qna/{qna_id}", get(qna::get_qna))
        .route("/api/qna/{qna_id}/admin", get(qna::get_qna_as_admin))
        .route("/api/qna/{qna_id}/edit", get(qna::get_qna_for_update))
        .route(
            "/api/ebook",
            get(ebook::get_ebooks)
                .post(ebook::create_ebook)
                .patch(ebook::update_ebook)
                .delete(ebook::delete_ebook),
        )
        .route(
            "/api/ebook/star-rating",
            get(ebook::get_ebooks_by_rating).post(ebook::rate_ebook),
        )
        .route(
            "/api/ebook/series",
            get(ebook::get_series).post(ebook::create_series),
        )
        .route("/api/ebook/{ebook_id}", get(ebook::get_ebook))
        .route("/api/ebook/{ebook_id}/edit", get(ebook::get_ebook_for_update))
        .route(
            "/api/small-talk/queue",
            get(small_talk::queue_read_all).post(small_talk::queue_insert),
        )
        .route("/api/small-talk/queue/pop", post(small_talk::queue_pop))
        .route("/api/small-talk/queue/random", post(small_talk::queue_random))
        .route(
            "/api/small-talk/subject",
            get(small_talk::get_subjects)
                .post(small_talk::create_subject)
                .delete(small_talk::delete_subject),
        )
        .route(
            "/api/small-talk/subject/{subject_id}",
            get(small_talk::get_subject),
        )
        .route("/api/small-talk/talk", post(small_talk::create_talk))
        .route(
            "/api/small-talk/random-subject",
            get(small_talk::get_random_subject),
        )
}

/// Registers the bearer JWT scheme referenced by protected paths.
struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer",
                SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
            );
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health,
        board::get_boards,
        board::get_categories,
        board::get_boards_by_category,
        board::search_boards,
        board::get_latest_boards,
        board::get_my_boards,
        board::get_liked_boards,
        board::get_board,
        board::get_board_for_update,
        board::create_board,
        board::update_board,
        board::delete_board,
        board::recommend_board,
        board::get_board_comments,
        comment::create_comment,
        comment::update_comment,
        comment::delete_comment,
        notify::report_board,
        notify::get_pending_reports,
        notify::ban_board,
        qna::get_qnas,
        qna::create_qna,
        qna::get_qna,
        qna::get_qna_as_admin,
        qna::get_qna_for_update,
        qna::update_qna,
        qna::delete_qna,
        ebook::get_ebooks,
        ebook::get_ebook,
        ebook::get_ebook_for_update,
        ebook::create_ebook,
        ebook::update_ebook,
        ebook::delete_ebook,
        ebook::rate_ebook,
        ebook::get_ebooks_by_rating,
        ebook::get_series,
        ebook::create_series,
        small_talk::queue_insert,
        small_talk::queue_read_all,
        small_talk::queue_pop,
        small_talk::queue_random,
        small_talk::get_subjects,
        small_talk::get_subject,
        small_talk::create_subject,
        small_talk::delete_subject,
        small_talk::create_talk,
        small_talk::get_random_subject,
    ),
    components(schemas(
        ErrorDto,
        ResultDto,
        HealthDto,
        DataDto<BoardDetailDto>,
        DataDto<QnaDto>,
        DataDto<EbookDto>,
        PageDto<BoardListItemDto>,
        PageDto<QnaListItemDto>,
        PageDto<EbookListItemDto>,
        BoardListItemDto,
        BoardDetailDto,
        BoardCategoryDto,
        CreateBoardDto,
        UpdateBoardDto,
        BoardIdDto,
        RecommendDto,
        CommentDto,
        CreateCommentDto,
        UpdateCommentDto,
        CommentIdDto,
        NotifyDto,
        CreateNotifyDto,
        BanBoardDto,
        QnaListItemDto,
        QnaDto,
        CreateQnaDto,
        UpdateQnaDto,
        QnaIdDto,
        EbookListItemDto,
        EbookDto,
        CreateEbookDto,
        UpdateEbookDto,
        EbookIdDto,
        StarRateDto,
        StarRateResultDto,
        EbookSeriesDto,
        CreateEbookSeriesDto,
        ParticipantDto,
        QueueInsertDto,
        QueuePopDto,
        QueueDto,
        SmallSubjectDto,
        SmallTalkDto,
        SmallSubjectDetailDto,
        CreateSmallSubjectDto,
        SmallSubjectIdDto,
        CreateSmallTalkDto,
        CreatedSmallTalkDto,
        RandomSubjectDto,
    )),
    modifiers(&BearerAuth),
    tags(
        (name = health::HEALTH_TAG, description = "Service liveness"),
        (name = board::BOARD_TAG, description = "Boards, search and recommendations"),
        (name = comment::COMMENT_TAG, description = "Board comments"),
        (name = notify::REPORT_TAG, description = "Board reports and moderation"),
        (name = qna::QNA_TAG, description = "Questions and answers"),
        (name = ebook::EBOOK_TAG, description = "E-books, series and star ratings"),
        (name = small_talk::SMALL_TALK_TAG, description = "Small talk subjects and the pairing queue"),
    )
)]
pub struct ApiDoc;
