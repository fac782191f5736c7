use super::*;

/// Tests that series ownership is checked against the caller.
///
/// Expected: Ok(true) for the owner, Ok(false) for anyone else
#[tokio::test]
async fn series_belongs_to_creator_only() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_ebook_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let repo = EbookRepository::new(db);

    let series = repo.create_series(owner.id, "Rust tales".to_string()).await?;

    assert!(repo.series_owned_by(series.id, owner.id).await?);
    assert!(!repo.series_owned_by(series.id, other.id).await?);
    assert_eq!(repo.get_series_by_user(owner.id).await?.len(), 1);
    assert!(repo.get_series_by_user(other.id).await?.is_empty());

    Ok(())
}

/// Tests that soft-deleted e-books disappear from the catalog.
///
/// Expected: Ok with an empty listing after delete
#[tokio::test]
async fn soft_deleted_ebook_is_hidden() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_ebook_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, ebook) = factory::helpers::create_ebook_with_dependencies(db).await?;
    let repo = EbookRepository::new(db);

    repo.soft_delete(ebook).await?;

    assert!(repo.get_all().await?.is_empty());

    Ok(())
}
