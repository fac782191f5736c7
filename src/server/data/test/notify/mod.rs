use crate::server::data::notify::NotifyRepository;
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

/// Tests that pending reports carry the reported board's title.
///
/// Expected: Ok with unresolved reports oldest first
#[tokio::test]
async fn lists_pending_reports_oldest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _category, board) = factory::helpers::create_board_with_dependencies(db).await?;
    let repo = NotifyRepository::new(db);
    let first = repo
        .create(board.id, user.id, "spam".to_string())
        .await?;
    let second = repo
        .create(board.id, user.id, "abuse".to_string())
        .await?;
    let resolved = factory::board::create_notify(db, board.id, user.id).await?;
    repo.resolve(resolved).await?;

    let pending = repo.get_pending().await?;

    assert_eq!(
        pending.iter().map(|n| n.id).collect::<Vec<_>>(),
        vec![first.id, second.id]
    );
    assert_eq!(pending[0].board_title, board.title);
    assert_eq!(pending[0].reason, "spam");

    Ok(())
}

/// Tests banning a board and resolving its report.
///
/// Expected: Ok with the board banned and the report checked and hidden
#[tokio::test]
async fn bans_board_and_resolves_report() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _category, board) = factory::helpers::create_board_with_dependencies(db).await?;
    let notify = factory::board::create_notify(db, board.id, user.id).await?;
    let notify_id = notify.id;
    let repo = NotifyRepository::new(db);

    let found = repo.find_board(board.id).await?.unwrap();
    repo.ban_board(found).await?;
    repo.resolve(notify).await?;

    let stored_board = entity::prelude::Board::find_by_id(board.id)
        .one(db)
        .await?
        .unwrap();
    let stored_notify = entity::prelude::BoardNotify::find_by_id(notify_id)
        .one(db)
        .await?
        .unwrap();
    assert!(stored_board.ban);
    assert!(stored_notify.is_checked);
    assert!(stored_notify.is_deleted);
    assert!(repo.find_pending(notify_id).await?.is_none());

    Ok(())
}
