use crate::server::{error::AppError, service::notify::NotifyService};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

async fn stored_board(
    db: &sea_orm::DatabaseConnection,
    id: i32,
) -> Result<entity::board::Model, DbErr> {
    entity::prelude::Board::find_by_id(id)
        .one(db)
        .await?
        .ok_or(DbErr::RecordNotFound(format!("board {}", id)))
}

/// Tests the full ban flow.
///
/// Expected: board banned, report resolved and gone from the pending list
#[tokio::test]
async fn ban_bans_board_and_resolves_report() -> Result<(), AppError> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _category, board) = factory::helpers::create_board_with_dependencies(db).await?;
    let service = NotifyService::new(db);
    service
        .report(board.id, user.id, "spam".to_string())
        .await?;
    let report = service.get_pending().await?.remove(0);

    service.ban(board.id, report.id).await?;

    assert!(stored_board(db, board.id).await?.ban);
    assert!(service.get_pending().await?.is_empty());

    Ok(())
}

/// Tests that a ban with an unknown report changes nothing.
///
/// Expected: Err(AppError::NotFound) and the board still not banned
#[tokio::test]
async fn ban_with_missing_report_rolls_back() -> Result<(), AppError> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, _category, board) = factory::helpers::create_board_with_dependencies(db).await?;

    let result = NotifyService::new(db).ban(board.id, 999).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert!(!stored_board(db, board.id).await?.ban);

    Ok(())
}

/// Tests banning a board with a report filed against another board.
///
/// Expected: Err(AppError::BadRequest), neither board banned, report still pending
#[tokio::test]
async fn ban_rejects_report_for_other_board() -> Result<(), AppError> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, category, reported) = factory::helpers::create_board_with_dependencies(db).await?;
    let unrelated = factory::create_board(db, user.id, category.id).await?;
    let report = factory::board::create_notify(db, reported.id, user.id).await?;
    let service = NotifyService::new(db);

    let result = service.ban(unrelated.id, report.id).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert!(!stored_board(db, unrelated.id).await?.ban);
    assert!(!stored_board(db, reported.id).await?.ban);
    assert_eq!(service.get_pending().await?.len(), 1);

    Ok(())
}

/// Tests banning a board that does not exist.
///
/// Expected: Err(AppError::NotFound) and the report still pending
#[tokio::test]
async fn ban_with_missing_board_keeps_report() -> Result<(), AppError> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _category, board) = factory::helpers::create_board_with_dependencies(db).await?;
    let report = factory::board::create_notify(db, board.id, user.id).await?;
    let service = NotifyService::new(db);

    let result = service.ban(board.id + 100, report.id).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert_eq!(service.get_pending().await?.len(), 1);

    Ok(())
}

/// Tests reporting a board that cannot be seen.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn report_requires_visible_board() -> Result<(), AppError> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let result = NotifyService::new(db)
        .report(404, user.id, "gone".to_string())
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
