use super::*;

/// Tests admin user successfully passes admin permission check.
///
/// Expected: Ok(VerifiedUser) for a user whose row has admin = true
#[tokio::test]
async fn grants_access_to_admin_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let jwt = JwtService::new(SECRET);

    let admin = factory::user::create_admin(db).await?;
    let headers = bearer(&jwt.issue(admin.id, &admin.name, 3600));

    let user = AuthGuard::new(db, &jwt, &headers)
        .require(&[Permission::Admin])
        .await?;

    assert_eq!(user.user_id, admin.id);

    Ok(())
}

/// Tests non-admin user is denied admin permission.
///
/// Expected: Err(AuthError::AccessDenied) carrying the user's ID
#[tokio::test]
async fn denies_access_to_non_admin_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let jwt = JwtService::new(SECRET);

    let member = factory::create_user(db).await?;
    let headers = bearer(&jwt.issue(member.id, &member.name, 3600));

    let result = AuthGuard::new(db, &jwt, &headers)
        .require(&[Permission::Admin])
        .await;

    match result {
        Err(AppError::AuthErr(AuthError::AccessDenied(user_id))) => {
            assert_eq!(user_id, member.id)
        }
        other => panic!("Expected AccessDenied, got {:?}", other),
    }

    Ok(())
}

/// Tests an admin check for a token whose user no longer exists.
///
/// Expected: Err(AuthError::UserNotInDatabase)
#[tokio::test]
async fn denies_access_when_user_missing() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let jwt = JwtService::new(SECRET);
    let headers = bearer(&jwt.issue(999, "ghost", 3600));

    let result = AuthGuard::new(db, &jwt, &headers)
        .require(&[Permission::Admin])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(999)))
    ));

    Ok(())
}
