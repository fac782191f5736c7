use super::*;

/// Tests the three transitions and their messages.
///
/// Expected: create recommend, cancel recommend, reRecommend, with counts 1, 0, 1
#[tokio::test]
async fn walks_through_transitions() -> Result<(), AppError> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _category, board) = factory::helpers::create_board_with_dependencies(db).await?;
    let service = RecommendService::new(db);

    let first = service.toggle(board.id, user.id).await?;
    assert_eq!(first.action, RecommendAction::Created);
    assert_eq!(first.recommend_count, 1);
    assert_eq!(first.action.message(), "create recommend");

    let second = service.toggle(board.id, user.id).await?;
    assert_eq!(second.action, RecommendAction::Cancelled);
    assert_eq!(second.recommend_count, 0);
    assert_eq!(second.action.message(), "cancel recommend");

    let third = service.toggle(board.id, user.id).await?;
    assert_eq!(third.action, RecommendAction::Restored);
    assert_eq!(third.recommend_count, 1);
    assert_eq!(third.action.message(), "reRecommend");

    Ok(())
}

/// Tests that the final state follows the parity of the number of toggles.
///
/// Expected: after n toggles exactly one row exists, with check == (n is odd)
#[tokio::test]
async fn final_state_follows_parity() -> Result<(), AppError> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let category = factory::create_category(db).await?;
    let service = RecommendService::new(db);

    for n in 1..=6 {
        let board = factory::create_board(db, author.id, category.id).await?;
        let voter = factory::create_user(db).await?;

        for _ in 0..n {
            service.toggle(board.id, voter.id).await?;
        }

        let rows = rows_for(db, board.id, voter.id).await?;
        assert_eq!(rows.len(), 1, "n = {}", n);
        assert_eq!(rows[0].check, n % 2 == 1, "n = {}", n);
    }

    Ok(())
}

/// Tests that the reported count always equals the number of active rows.
///
/// Several users toggle the same board a different number of times; each response
/// is checked against an independent count taken right after it.
///
/// Expected: every returned count equals the independent count
#[tokio::test]
async fn returned_count_matches_independent_count() -> Result<(), AppError> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_author, _category, board) = factory::helpers::create_board_with_dependencies(db).await?;
    let service = RecommendService::new(db);

    let mut voters = Vec::new();
    for _ in 0..4 {
        voters.push(factory::create_user(db).await?);
    }

    for (i, voter) in voters.iter().enumerate() {
        for _ in 0..=i {
            let outcome = service.toggle(board.id, voter.id).await?;
            assert_eq!(outcome.recommend_count, active_count(db, board.id).await?);
        }
    }

    // Voters toggled 1, 2, 3 and 4 times: two odd counts stay recommended
    assert_eq!(active_count(db, board.id).await?, 2);

    Ok(())
}

/// Tests that users on the same board do not affect each other's rows.
///
/// Expected: cancelling one user's recommendation leaves the other's in place
#[tokio::test]
async fn users_are_independent() -> Result<(), AppError> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (alice, _category, board) = factory::helpers::create_board_with_dependencies(db).await?;
    let bob = factory::create_user(db).await?;
    let service = RecommendService::new(db);

    service.toggle(board.id, alice.id).await?;
    let after_bob = service.toggle(board.id, bob.id).await?;
    assert_eq!(after_bob.action, RecommendAction::Created);
    assert_eq!(after_bob.recommend_count, 2);

    let after_cancel = service.toggle(board.id, alice.id).await?;
    assert_eq!(after_cancel.action, RecommendAction::Cancelled);
    assert_eq!(after_cancel.recommend_count, 1);

    assert!(!rows_for(db, board.id, alice.id).await?[0].check);
    assert!(rows_for(db, board.id, bob.id).await?[0].check);

    Ok(())
}

/// Tests that banned, deleted and missing boards cannot be recommended.
///
/// Expected: Err(AppError::NotFound) and no row written
#[tokio::test]
async fn rejects_closed_boards() -> Result<(), AppError> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let category = factory::create_category(db).await?;
    let banned = BoardFactory::new(db, user.id, category.id)
        .banned(true)
        .build()
        .await?;
    let deleted = BoardFactory::new(db, user.id, category.id)
        .deleted(true)
        .build()
        .await?;
    let service = RecommendService::new(db);

    for board_id in [banned.id, deleted.id, deleted.id + 100] {
        let result = service.toggle(board_id, user.id).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    let rows = entity::prelude::BoardRecommend::find().count(db).await?;
    assert_eq!(rows, 0);

    Ok(())
}
