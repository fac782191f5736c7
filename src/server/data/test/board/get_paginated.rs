use super::*;

/// Tests that listings skip deleted and banned boards.
///
/// Expected: Ok with only the visible board and a total of 1
#[tokio::test]
async fn excludes_deleted_and_banned_boards() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, category, visible) = factory::helpers::create_board_with_dependencies(db).await?;
    BoardFactory::new(db, user.id, category.id)
        .deleted(true)
        .build()
        .await?;
    BoardFactory::new(db, user.id, category.id)
        .banned(true)
        .build()
        .await?;

    let (items, total) = BoardRepository::new(db)
        .get_paginated(&PageRequest::default())
        .await?;

    assert_eq!(total, 1);
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, visible.id);
    assert_eq!(items[0].category, category.category);
    assert_eq!(items[0].nickname, user.nickname);

    Ok(())
}

/// Tests newest-first ordering and page windows.
///
/// Expected: Ok with the second page holding the oldest board
#[tokio::test]
async fn pages_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let category = factory::create_category(db).await?;
    let first = factory::create_board(db, user.id, category.id).await?;
    let second = factory::create_board(db, user.id, category.id).await?;
    let third = factory::create_board(db, user.id, category.id).await?;

    let repo = BoardRepository::new(db);
    let (page_one, total) = repo.get_paginated(&PageRequest::new(1, 2)).await?;
    let (page_two, _) = repo.get_paginated(&PageRequest::new(2, 2)).await?;

    assert_eq!(total, 3);
    assert_eq!(
        page_one.iter().map(|b| b.id).collect::<Vec<_>>(),
        vec![third.id, second.id]
    );
    assert_eq!(page_two.iter().map(|b| b.id).collect::<Vec<_>>(), vec![first.id]);

    Ok(())
}

/// Tests that list rows carry the count of active recommendations only.
///
/// Expected: Ok with recommend_count 2 (the cancelled row is ignored)
#[tokio::test]
async fn counts_active_recommendations() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_author, _category, board) = factory::helpers::create_board_with_dependencies(db).await?;
    for check in [true, true, false] {
        let voter = factory::create_user(db).await?;
        factory::board::create_recommend(db, board.id, voter.id, check).await?;
    }

    let (items, _) = BoardRepository::new(db)
        .get_paginated(&PageRequest::default())
        .await?;

    assert_eq!(items[0].recommend_count, 2);

    Ok(())
}

/// Tests filtering by category.
///
/// Expected: Ok with boards from the requested category only
#[tokio::test]
async fn filters_by_category() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let news = factory::create_category(db).await?;
    let free = factory::create_category(db).await?;
    let in_news = factory::create_board(db, user.id, news.id).await?;
    factory::create_board(db, user.id, free.id).await?;

    let (items, total) = BoardRepository::new(db)
        .get_paginated_by_category(news.id, &PageRequest::default())
        .await?;

    assert_eq!(total, 1);
    assert_eq!(items[0].id, in_news.id);

    Ok(())
}

/// Tests that `latest` caps the result at the newest five boards.
///
/// Expected: Ok with 5 boards, newest first
#[tokio::test]
async fn latest_returns_newest_five() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let category = factory::create_category(db).await?;
    let mut ids = Vec::new();
    for _ in 0..7 {
        ids.push(factory::create_board(db, user.id, category.id).await?.id);
    }

    let latest = BoardRepository::new(db).latest().await?;

    ids.reverse();
    assert_eq!(latest.len() as u64, LATEST_BOARD_COUNT);
    assert_eq!(
        latest.iter().map(|b| b.id).collect::<Vec<_>>(),
        ids[..5].to_vec()
    );

    Ok(())
}

/// Tests listing one user's boards.
///
/// Expected: Ok with the author's board only
#[tokio::test]
async fn filters_by_author() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, category, board) = factory::helpers::create_board_with_dependencies(db).await?;
    let other = factory::create_user(db).await?;
    factory::create_board(db, other.id, category.id).await?;

    let (items, total) = BoardRepository::new(db)
        .get_paginated_by_user(author.id, &PageRequest::default())
        .await?;

    assert_eq!(total, 1);
    assert_eq!(items[0].id, board.id);

    Ok(())
}
