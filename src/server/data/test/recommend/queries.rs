use super::*;

/// Tests that only active rows are counted, per board.
///
/// Expected: Ok(2) for the board with two active rows, Ok(0) for the other
#[tokio::test]
async fn counts_active_rows_per_board() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, category, board) = factory::helpers::create_board_with_dependencies(db).await?;
    let other_board = factory::create_board(db, author.id, category.id).await?;
    for check in [true, false, true] {
        let voter = factory::create_user(db).await?;
        factory::board::create_recommend(db, board.id, voter.id, check).await?;
    }

    let repo = RecommendRepository::new(db);

    assert_eq!(repo.count(board.id).await?, 2);
    assert_eq!(repo.count(other_board.id).await?, 0);

    Ok(())
}

/// Tests flipping the check flag on an existing row.
///
/// Expected: Ok(Some) with the stored row negated on each call
#[tokio::test]
async fn flips_check_flag_in_place() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _category, board) = factory::helpers::create_board_with_dependencies(db).await?;
    factory::board::create_recommend(db, board.id, user.id, true).await?;
    let repo = RecommendRepository::new(db);

    let cancelled = repo.flip_check(board.id, user.id).await?.unwrap();
    assert!(!cancelled.check);
    assert_eq!(repo.count(board.id).await?, 0);

    let restored = repo.flip_check(board.id, user.id).await?.unwrap();
    assert!(restored.check);
    assert_eq!(restored.id, cancelled.id);
    assert_eq!(repo.count(board.id).await?, 1);

    Ok(())
}

/// Tests flipping when the pair has no row.
///
/// Expected: Ok(None) and nothing inserted
#[tokio::test]
async fn flip_without_row_returns_none() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _category, board) = factory::helpers::create_board_with_dependencies(db).await?;
    let other = factory::create_user(db).await?;
    factory::board::create_recommend(db, board.id, other.id, true).await?;
    let repo = RecommendRepository::new(db);

    assert!(repo.flip_check(board.id, user.id).await?.is_none());
    assert!(repo.find(board.id, user.id).await?.is_none());
    assert_eq!(repo.count(board.id).await?, 1);

    Ok(())
}

/// Tests which boards accept recommendations.
///
/// Expected: Ok(true) for a visible board, Ok(false) for banned, deleted or missing
#[tokio::test]
async fn board_is_open_only_when_visible() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, category, open) = factory::helpers::create_board_with_dependencies(db).await?;
    let banned = BoardFactory::new(db, user.id, category.id)
        .banned(true)
        .build()
        .await?;
    let deleted = BoardFactory::new(db, user.id, category.id)
        .deleted(true)
        .build()
        .await?;
    let repo = RecommendRepository::new(db);

    assert!(repo.board_is_open(open.id).await?);
    assert!(!repo.board_is_open(banned.id).await?);
    assert!(!repo.board_is_open(deleted.id).await?);
    assert!(!repo.board_is_open(deleted.id + 100).await?);

    Ok(())
}
