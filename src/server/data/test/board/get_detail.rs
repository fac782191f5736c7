use super::*;

/// Tests loading a visible board with its relations.
///
/// Expected: Ok(Some) with category, author and recommend count
#[tokio::test]
async fn gets_board_with_relations() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, category, board) = factory::helpers::create_board_with_dependencies(db).await?;
    factory::board::create_recommend(db, board.id, user.id, true).await?;

    let detail = BoardRepository::new(db).get_detail(board.id).await?.unwrap();

    assert_eq!(detail.id, board.id);
    assert_eq!(detail.title, board.title);
    assert_eq!(detail.category, category.category);
    assert_eq!(detail.user_id, user.id);
    assert_eq!(detail.nickname, user.nickname);
    assert_eq!(detail.recommend_count, 1);

    Ok(())
}

/// Tests that a banned board has no detail.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_banned_board() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let category = factory::create_category(db).await?;
    let board = BoardFactory::new(db, user.id, category.id)
        .banned(true)
        .build()
        .await?;

    assert!(BoardRepository::new(db).get_detail(board.id).await?.is_none());

    Ok(())
}

/// Tests that a missing board has no detail.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_board() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(BoardRepository::new(db).get_detail(999).await?.is_none());

    Ok(())
}
