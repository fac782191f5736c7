use super::*;

async fn search(
    db: &sea_orm::DatabaseConnection,
    scope: SearchScope,
    keyword: &str,
) -> Result<Vec<i32>, DbErr> {
    let page = PageRequest {
        keyword: Some(keyword.to_string()),
        ..PageRequest::default()
    };
    let condition = any_word_matches(scope.columns(), page.keyword());
    let (items, _) = BoardRepository::new(db).search(condition, &page).await?;

    Ok(items.into_iter().map(|b| b.id).collect())
}

/// Tests that a board matches when any keyword word appears.
///
/// Expected: Ok with both boards, each matching a different word
#[tokio::test]
async fn matches_any_word() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let category = factory::create_category(db).await?;
    let rust = BoardFactory::new(db, user.id, category.id)
        .title("learning rust")
        .build()
        .await?;
    let tokio = BoardFactory::new(db, user.id, category.id)
        .title("tokio runtime")
        .build()
        .await?;
    BoardFactory::new(db, user.id, category.id)
        .title("gardening")
        .build()
        .await?;

    let ids = search(db, SearchScope::Title, "rust  tokio").await?;

    assert_eq!(ids, vec![tokio.id, rust.id]);

    Ok(())
}

/// Tests that the scope restricts which columns are searched.
///
/// Expected: Ok with no title hit for a word only present in contents
#[tokio::test]
async fn respects_scope() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let category = factory::create_category(db).await?;
    let board = BoardFactory::new(db, user.id, category.id)
        .title("weekly notes")
        .contents("borrow checker tips")
        .build()
        .await?;

    assert!(search(db, SearchScope::Title, "borrow").await?.is_empty());
    assert_eq!(search(db, SearchScope::Contents, "borrow").await?, vec![board.id]);
    assert_eq!(search(db, SearchScope::All, "borrow").await?, vec![board.id]);

    Ok(())
}

/// Tests that keyword characters are bound, not interpreted as SQL.
///
/// Expected: Ok with no matches and no database error
#[tokio::test]
async fn treats_quotes_as_plain_text() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, _category, _board) = factory::helpers::create_board_with_dependencies(db).await?;

    let ids = search(db, SearchScope::All, "x' OR '1'='1").await?;

    assert!(ids.is_empty());

    Ok(())
}
