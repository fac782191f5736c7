use super::*;

/// Tests a request without an Authorization header.
///
/// Expected: Err(AuthError::MissingToken)
#[tokio::test]
async fn rejects_missing_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let jwt = JwtService::new(SECRET);
    let headers = HeaderMap::new();

    let result = AuthGuard::new(db, &jwt, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));

    Ok(())
}

/// Tests a header that does not use the Bearer scheme.
///
/// Expected: Err(AuthError::MissingToken)
#[tokio::test]
async fn rejects_non_bearer_scheme() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let jwt = JwtService::new(SECRET);
    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, HeaderValue::from_static("Basic dXNlcjpwYXNz"));

    let result = AuthGuard::new(db, &jwt, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));

    Ok(())
}

/// Tests a token signed with a different secret.
///
/// Expected: Err(AuthError::InvalidToken)
#[tokio::test]
async fn rejects_foreign_signature() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let jwt = JwtService::new(SECRET);
    let token = JwtService::new("other-secret").issue(1, "mallory", 3600);
    let headers = bearer(&token);

    let result = AuthGuard::new(db, &jwt, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken(_)))
    ));

    Ok(())
}

/// Tests an expired token.
///
/// Expected: Err(AuthError::InvalidToken)
#[tokio::test]
async fn rejects_expired_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let jwt = JwtService::new(SECRET);
    let token = jwt.issue(1, "late", -3600);
    let headers = bearer(&token);

    let result = AuthGuard::new(db, &jwt, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken(_)))
    ));

    Ok(())
}

/// Tests that a valid token yields the identity it carries.
///
/// No permission is requested, so the user table is not consulted.
///
/// Expected: Ok(VerifiedUser) with the token's user_id and username
#[tokio::test]
async fn returns_identity_from_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let jwt = JwtService::new(SECRET);
    let token = jwt.issue(42, "alice", 3600);
    let headers = bearer(&token);

    let user = AuthGuard::new(db, &jwt, &headers).require(&[]).await?;

    assert_eq!(user.user_id, 42);
    assert_eq!(user.username, "alice");

    Ok(())
}
