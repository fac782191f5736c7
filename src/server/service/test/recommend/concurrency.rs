use super::*;

/// Tests that two overlapping first toggles by one user never create two rows.
///
/// The in-memory pool runs the two transactions one after the other; the branch
/// where the insert loses to a concurrent request is covered separately below.
///
/// Expected: exactly one row, check false (created then cancelled)
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn concurrent_toggles_keep_one_row() -> Result<(), AppError> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _category, board) = factory::helpers::create_board_with_dependencies(db).await?;

    let first = RecommendService::new(db);
    let second = RecommendService::new(db);
    let (a, b) = tokio::join!(
        first.toggle(board.id, user.id),
        second.toggle(board.id, user.id)
    );
    let (a, b) = (a?, b?);

    let mut actions = vec![a.action, b.action];
    actions.sort_by_key(|action| action.message());
    assert_eq!(
        actions,
        vec![RecommendAction::Cancelled, RecommendAction::Created]
    );

    let rows = rows_for(db, board.id, user.id).await?;
    assert_eq!(rows.len(), 1);
    assert!(!rows[0].check);

    Ok(())
}

/// Tests the branch where another request inserted the row after this toggle
/// found none.
///
/// The row is stored before `toggle_missing` runs, so its insert conflicts and it
/// must flip the existing row instead.
///
/// Expected: Cancelled, exactly one row, check false
#[tokio::test]
async fn lost_insert_flips_winner_row() -> Result<(), AppError> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _category, board) = factory::helpers::create_board_with_dependencies(db).await?;
    let winner = factory::board::create_recommend(db, board.id, user.id, true).await?;

    let txn = db.begin().await?;
    let action = RecommendService::toggle_missing(&txn, board.id, user.id).await?;
    txn.commit().await?;

    assert_eq!(action, RecommendAction::Cancelled);

    let rows = rows_for(db, board.id, user.id).await?;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, winner.id);
    assert!(!rows[0].check);

    Ok(())
}

/// Tests the lost-insert branch when the winner's row was cancelled.
///
/// Expected: Restored, exactly one row, check true
#[tokio::test]
async fn lost_insert_restores_cancelled_row() -> Result<(), AppError> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _category, board) = factory::helpers::create_board_with_dependencies(db).await?;
    factory::board::create_recommend(db, board.id, user.id, false).await?;

    let action = RecommendService::toggle_missing(db, board.id, user.id).await?;

    assert_eq!(action, RecommendAction::Restored);

    let rows = rows_for(db, board.id, user.id).await?;
    assert_eq!(rows.len(), 1);
    assert!(rows[0].check);
    assert_eq!(active_count(db, board.id).await?, 1);

    Ok(())
}

/// Tests that a failure after the toggle's write leaves nothing behind.
///
/// The toggle runs inside a transaction that then hits a failing statement and is
/// rolled back.
///
/// Expected: the failing statement errors and no recommendation row exists afterwards
#[tokio::test]
async fn failure_mid_transaction_rolls_back() -> Result<(), AppError> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _category, board) = factory::helpers::create_board_with_dependencies(db).await?;

    let txn = db.begin().await?;
    let outcome = RecommendService::toggle_in(&txn, board.id, user.id).await?;
    assert_eq!(outcome.recommend_count, 1);

    let failure = txn
        .execute_unprepared("INSERT INTO missing_table (id) VALUES (1)")
        .await;
    assert!(failure.is_err());

    txn.rollback().await?;

    assert!(rows_for(db, board.id, user.id).await?.is_empty());
    assert_eq!(active_count(db, board.id).await?, 0);

    Ok(())
}
