use crate::server::{
    error::AppError,
    model::{ebook::CreateEbookParams, Ownership},
    service::ebook::EbookService,
};
use test_utils::{builder::TestBuilder, factory};

/// Tests the accepted rating range.
///
/// Expected: Err(AppError::BadRequest) for 0 and 6, Ok for 1 and 5
#[tokio::test]
async fn rate_must_be_between_one_and_five() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ebook_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_author, ebook) = factory::helpers::create_ebook_with_dependencies(db).await?;
    let reader = factory::create_user(db).await?;
    let service = EbookService::new(db);

    for rate in [0, 6, -1] {
        assert!(matches!(
            service.rate(ebook.id, reader.id, rate).await,
            Err(AppError::BadRequest(_))
        ));
    }

    let low = service.rate(ebook.id, reader.id, 1).await?;
    assert_eq!(low.average, Some(1.0));
    let high = service.rate(ebook.id, reader.id, 5).await?;
    assert_eq!(high.average, Some(5.0));
    assert_eq!(high.count, 1);

    Ok(())
}

/// Tests rating an e-book that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn rate_requires_existing_ebook() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ebook_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let reader = factory::create_user(db).await?;

    let result = EbookService::new(db).rate(77, reader.id, 3).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests filing an e-book under someone else's series.
///
/// Expected: NotOwner for a foreign series, Owner for the caller's own
#[tokio::test]
async fn create_requires_owned_series() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ebook_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let series = factory::create_series(db, owner.id).await?;
    let service = EbookService::new(db);
    let params = |user_id| CreateEbookParams {
        user_id,
        title: "Chapter".to_string(),
        contents: "Once upon a time".to_string(),
        ebook_series_id: Some(series.id),
    };

    assert!(matches!(
        service.create(params(other.id)).await?,
        Ownership::NotOwner
    ));
    assert!(matches!(
        service.create(params(owner.id)).await?,
        Ownership::Owner(e) if e.ebook_series_id == Some(series.id)
    ));
    assert_eq!(service.get_all().await?.len(), 1);

    Ok(())
}

/// Tests that a blank series name is rejected.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn create_series_rejects_blank_name() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ebook_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let result = EbookService::new(db)
        .create_series(user.id, "   ".to_string())
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
