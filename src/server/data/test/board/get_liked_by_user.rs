use super::*;

/// Tests that liked boards follow the most recent recommendation first.
///
/// Expected: Ok with active recommendations only, latest first
#[tokio::test]
async fn lists_active_recommendations_latest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let reader = factory::create_user(db).await?;
    let category = factory::create_category(db).await?;
    let older = factory::create_board(db, author.id, category.id).await?;
    let newer = factory::create_board(db, author.id, category.id).await?;
    let cancelled = factory::create_board(db, author.id, category.id).await?;

    factory::board::create_recommend(db, newer.id, reader.id, true).await?;
    factory::board::create_recommend(db, older.id, reader.id, true).await?;
    factory::board::create_recommend(db, cancelled.id, reader.id, false).await?;

    let (items, total) = BoardRepository::new(db)
        .get_liked_by_user(reader.id, &PageRequest::default())
        .await?;

    assert_eq!(total, 2);
    assert_eq!(
        items.iter().map(|b| b.id).collect::<Vec<_>>(),
        vec![older.id, newer.id]
    );

    Ok(())
}

/// Tests that banned boards drop out of the liked list.
///
/// Expected: Ok with an empty page
#[tokio::test]
async fn skips_banned_boards() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let reader = factory::create_user(db).await?;
    let category = factory::create_category(db).await?;
    let banned = BoardFactory::new(db, author.id, category.id)
        .banned(true)
        .build()
        .await?;
    factory::board::create_recommend(db, banned.id, reader.id, true).await?;

    let (items, total) = BoardRepository::new(db)
        .get_liked_by_user(reader.id, &PageRequest::default())
        .await?;

    assert_eq!(total, 0);
    assert!(items.is_empty());

    Ok(())
}
