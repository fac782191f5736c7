use super::*;

/// Tests that the first insert for a pair stores an active row.
///
/// Expected: Ok(true) with one row where check is true
#[tokio::test]
async fn inserts_active_row() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _category, board) = factory::helpers::create_board_with_dependencies(db).await?;
    let repo = RecommendRepository::new(db);

    assert!(repo.insert_if_absent(board.id, user.id).await?);

    let row = repo.find(board.id, user.id).await?.unwrap();
    assert!(row.check);

    Ok(())
}

/// Tests that a second insert for the same pair is a no-op.
///
/// The unique (board_id, user_id) index turns the conflicting insert into nothing,
/// leaving the existing row untouched.
///
/// Expected: Ok(false) with still exactly one row, check unchanged
#[tokio::test]
async fn second_insert_is_noop() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _category, board) = factory::helpers::create_board_with_dependencies(db).await?;
    factory::board::create_recommend(db, board.id, user.id, false).await?;
    let repo = RecommendRepository::new(db);

    assert!(!repo.insert_if_absent(board.id, user.id).await?);

    let rows = entity::prelude::BoardRecommend::find().count(db).await?;
    assert_eq!(rows, 1);
    assert!(!repo.find(board.id, user.id).await?.unwrap().check);

    Ok(())
}
