use super::*;

/// Tests creating, updating and soft-deleting a board.
///
/// Expected: Ok with `is_modified` set after update and the board hidden after delete
#[tokio::test]
async fn creates_updates_and_soft_deletes() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let category = factory::create_category(db).await?;
    let repo = BoardRepository::new(db);

    let board = repo
        .create(CreateBoardParams {
            user_id: user.id,
            title: "hello".to_string(),
            contents: "first post".to_string(),
            board_category_id: category.id,
        })
        .await?;
    assert!(!board.is_modified);
    assert!(!board.ban);

    let updated = repo
        .update(
            board,
            UpdateBoardParams {
                id: 0,
                title: "hello again".to_string(),
                contents: "edited".to_string(),
                board_category_id: category.id,
            },
        )
        .await?;
    assert_eq!(updated.title, "hello again");
    assert!(updated.is_modified);

    let id = updated.id;
    repo.soft_delete(updated).await?;
    assert!(repo.find_visible(id).await?.is_none());

    Ok(())
}

/// Tests category lookup helpers.
///
/// Expected: Ok with the created category listed and an unknown ID reported missing
#[tokio::test]
async fn lists_categories() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::create_category(db).await?;
    let repo = BoardRepository::new(db);

    let categories = repo.categories().await?;

    assert_eq!(categories.len(), 1);
    assert_eq!(categories[0].category, category.category);
    assert!(repo.category_exists(category.id).await?);
    assert!(!repo.category_exists(category.id + 100).await?);

    Ok(())
}
