use crate::server::{
    data::small_talk::SmallTalkRepository, model::small_talk::CreateSmallSubjectParams,
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

/// Tests that titles stay taken after their subject is deleted.
///
/// Expected: Ok(true) for the deleted subject's title, Ok(false) for a fresh one
#[tokio::test]
async fn title_exists_includes_deleted_subjects() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_small_talk_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let subject = factory::small_talk::create_subject_with_title(db, user.id, "weekend").await?;
    let repo = SmallTalkRepository::new(db);
    repo.soft_delete_subject(subject).await?;

    assert!(repo.title_exists("weekend").await?);
    assert!(!repo.title_exists("weekday").await?);

    Ok(())
}

/// Tests the optional title filter.
///
/// Expected: Ok with substring matches only; a blank filter lists everything
#[tokio::test]
async fn filters_subjects_by_title() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_small_talk_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let coffee = factory::small_talk::create_subject_with_title(db, user.id, "morning coffee").await?;
    factory::small_talk::create_subject_with_title(db, user.id, "evening walk").await?;
    let repo = SmallTalkRepository::new(db);

    let filtered = repo.list_subjects(Some("coffee")).await?;
    let all = repo.list_subjects(Some("  ")).await?;

    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].id, coffee.id);
    assert_eq!(filtered[0].nickname, user.nickname);
    assert_eq!(all.len(), 2);

    Ok(())
}

/// Tests loading a subject's talks.
///
/// Expected: Ok with talks newest first
#[tokio::test]
async fn gets_talks_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_small_talk_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let repo = SmallTalkRepository::new(db);
    let subject = repo
        .create_subject(CreateSmallSubjectParams {
            user_id: user.id,
            title: "books".to_string(),
            detail: "what are you reading".to_string(),
            img_url: None,
        })
        .await?;
    let first = repo
        .create_talk(subject.id, user.id, "a novel".to_string())
        .await?;
    let second = factory::small_talk::create_talk(db, subject.id, user.id).await?;

    let talks = repo.get_talks(subject.id).await?;

    assert_eq!(
        talks.iter().map(|t| t.id).collect::<Vec<_>>(),
        vec![second.id, first.id]
    );

    Ok(())
}

/// Tests drawing a random subject.
///
/// Expected: Ok(None) on an empty table, then one of the stored rows
#[tokio::test]
async fn draws_random_subject() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_small_talk_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SmallTalkRepository::new(db);
    assert!(repo.random_subject().await?.is_none());

    let stored = [
        factory::small_talk::create_random_subject(db, "favourite food").await?,
        factory::small_talk::create_random_subject(db, "dream trip").await?,
    ];

    for _ in 0..10 {
        let drawn = repo.random_subject().await?.unwrap();
        assert!(stored.iter().any(|s| s.id == drawn.id && s.subject == drawn.subject));
    }

    Ok(())
}
