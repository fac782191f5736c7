use crate::server::data::comment::CommentRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

/// Tests listing a board's comments.
///
/// Expected: Ok with live comments newest first, each carrying the author nickname
#[tokio::test]
async fn lists_live_comments_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _category, board) = factory::helpers::create_board_with_dependencies(db).await?;
    let first = factory::board::create_comment(db, board.id, user.id).await?;
    let second = factory::board::create_comment(db, board.id, user.id).await?;
    let removed = factory::board::create_comment(db, board.id, user.id).await?;

    let repo = CommentRepository::new(db);
    repo.soft_delete(removed).await?;

    let comments = repo.get_by_board(board.id).await?;

    assert_eq!(
        comments.iter().map(|c| c.id).collect::<Vec<_>>(),
        vec![second.id, first.id]
    );
    assert!(comments.iter().all(|c| c.nickname == user.nickname));

    Ok(())
}

/// Tests creating then editing a comment.
///
/// Expected: Ok with new contents and `is_modified` set
#[tokio::test]
async fn creates_and_updates_comment() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _category, board) = factory::helpers::create_board_with_dependencies(db).await?;
    let repo = CommentRepository::new(db);

    let comment = repo
        .create(board.id, user.id, "nice post".to_string())
        .await?;
    assert!(!comment.is_modified);

    let updated = repo.update(comment, "great post".to_string()).await?;

    assert_eq!(updated.contents, "great post");
    assert!(updated.is_modified);

    Ok(())
}

/// Tests that deleted comments cannot be found.
///
/// Expected: Ok(None)
#[tokio::test]
async fn soft_deleted_comment_is_not_found() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _category, board) = factory::helpers::create_board_with_dependencies(db).await?;
    let comment = factory::board::create_comment(db, board.id, user.id).await?;
    let id = comment.id;
    let repo = CommentRepository::new(db);

    repo.soft_delete(comment).await?;

    assert!(repo.find_by_id(id).await?.is_none());

    Ok(())
}
