use super::*;

/// Tests that a known token resolves to its user.
///
/// Expected: Ok with the token owner
#[tokio::test]
async fn resolves_known_token() -> Result<(), TestError> {
    let test = TestBuilder::new().with_accommodation_tables().build().await?;
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::UserFactory::new(db)
        .api_token("owner-token")
        .build()
        .await?;

    let headers = bearer("owner-token");
    let user = AuthGuard::new(db, &headers).require().await.unwrap();

    assert_eq!(user.id, owner.id);
    assert_eq!(user.email, owner.email);

    Ok(())
}

/// Tests a request without an Authorization header.
///
/// Expected: Err(AuthError::MissingToken)
#[tokio::test]
async fn fails_without_header() -> Result<(), TestError> {
    let test = TestBuilder::new().with_accommodation_tables().build().await?;
    let db = test.db.as_ref().unwrap();

    let headers = HeaderMap::new();
    let result = AuthGuard::new(db, &headers).require().await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));

    Ok(())
}

/// Tests a token that belongs to no user.
///
/// Expected: Err(AuthError::UnknownToken)
#[tokio::test]
async fn fails_with_unknown_token() -> Result<(), TestError> {
    let test = TestBuilder::new().with_accommodation_tables().build().await?;
    let db = test.db.as_ref().unwrap();

    factory::create_user(db).await?;

    let headers = bearer("not-a-token");
    let result = AuthGuard::new(db, &headers).require().await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UnknownToken))
    ));

    Ok(())
}
