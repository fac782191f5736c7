use super::*;

/// Tests that rating twice replaces the earlier rate.
///
/// Expected: Ok with one stored row and the second rate as the average
#[tokio::test]
async fn upsert_replaces_previous_rate() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_ebook_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, ebook) = factory::helpers::create_ebook_with_dependencies(db).await?;
    let repo = EbookRepository::new(db);

    repo.upsert_rate(ebook.id, user.id, 2).await?;
    repo.upsert_rate(ebook.id, user.id, 5).await?;

    let rows = entity::prelude::EbookStarRate::find().count(db).await?;
    let summary = repo.rating_summary(ebook.id).await?;
    assert_eq!(rows, 1);
    assert_eq!(summary.count, 1);
    assert_eq!(summary.average, Some(5.0));

    Ok(())
}

/// Tests averaging ratings from several users.
///
/// Expected: Ok with the mean of all rates
#[tokio::test]
async fn averages_across_users() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_ebook_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_author, ebook) = factory::helpers::create_ebook_with_dependencies(db).await?;
    for rate in [3, 4, 5] {
        let reader = factory::create_user(db).await?;
        factory::ebook::create_star_rate(db, ebook.id, reader.id, rate).await?;
    }

    let detail = EbookRepository::new(db).get_by_id(ebook.id).await?.unwrap();

    assert_eq!(detail.rating.count, 3);
    assert_eq!(detail.rating.average, Some(4.0));

    Ok(())
}

/// Tests ordering by average rating with unrated e-books last.
///
/// Expected: Ok with highest average first and the unrated e-book at the end
#[tokio::test]
async fn orders_by_average_with_unrated_last() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_ebook_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let reader = factory::create_user(db).await?;
    let low = factory::create_ebook(db, author.id).await?;
    let unrated = factory::create_ebook(db, author.id).await?;
    let high = factory::create_ebook(db, author.id).await?;
    factory::ebook::create_star_rate(db, low.id, reader.id, 2).await?;
    factory::ebook::create_star_rate(db, high.id, reader.id, 5).await?;

    let (items, total) = EbookRepository::new(db)
        .get_paginated_by_rating(&PageRequest::default())
        .await?;

    assert_eq!(total, 3);
    assert_eq!(
        items.iter().map(|e| e.id).collect::<Vec<_>>(),
        vec![high.id, low.id, unrated.id]
    );
    assert_eq!(items[2].rating.average, None);

    Ok(())
}
