use crate::server::{
    data::qna::QnaRepository,
    model::{
        page::PageRequest,
        qna::{CreateQnaParams, UpdateQnaParams},
    },
};
use sea_orm::DbErr;
use test_utils::{
    builder::TestBuilder,
    factory::{self, qna::QnaFactory},
};

/// Tests that listings include secret entries but skip banned ones.
///
/// Expected: Ok with two entries newest first
#[tokio::test]
async fn lists_visible_entries() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_qna_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let public = factory::create_qna(db, user.id).await?;
    let secret = QnaFactory::new(db, user.id).secret(true).build().await?;
    QnaFactory::new(db, user.id).banned(true).build().await?;

    let (items, total) = QnaRepository::new(db)
        .get_paginated(&PageRequest::default())
        .await?;

    assert_eq!(total, 2);
    assert_eq!(
        items.iter().map(|q| q.id).collect::<Vec<_>>(),
        vec![secret.id, public.id]
    );
    assert!(items[0].is_secret);

    Ok(())
}

/// Tests the create, update and delete lifecycle.
///
/// Expected: Ok with the username stored, `is_modified` set, then not found
#[tokio::test]
async fn creates_updates_and_deletes() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_qna_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let repo = QnaRepository::new(db);

    let created = repo
        .create(CreateQnaParams {
            user_id: user.id,
            username: "asker".to_string(),
            title: "How?".to_string(),
            contents: "Question body".to_string(),
            is_secret: true,
        })
        .await?;
    assert_eq!(created.username.as_deref(), Some("asker"));
    assert!(created.is_secret);

    let model = repo.find_by_id(created.id).await?.unwrap();
    let updated = repo
        .update(
            model,
            UpdateQnaParams {
                id: created.id,
                title: "How exactly?".to_string(),
                contents: "More detail".to_string(),
                is_secret: false,
            },
        )
        .await?;
    assert_eq!(updated.title, "How exactly?");
    assert!(!updated.is_secret);
    assert!(updated.is_modified);

    let model = repo.find_by_id(created.id).await?.unwrap();
    repo.soft_delete(model).await?;
    assert!(repo.find_by_id(created.id).await?.is_none());

    Ok(())
}
