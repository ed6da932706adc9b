use super::*;

/// Tests getting an accommodation joined with its location.
///
/// Expected: Ok(Some) with both entities
#[tokio::test]
async fn gets_accommodation_with_location() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_accommodation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, accommodation, location) =
        factory::helpers::create_accommodation_with_dependencies(db).await?;

    let repo = AccommodationRepository::new(db);
    let result = repo.get_by_id(accommodation.id).await?.unwrap();

    assert_eq!(result.accommodation, accommodation);
    assert_eq!(result.location, Some(location));

    Ok(())
}

/// Tests getting an accommodation whose location row is missing.
///
/// Expected: Ok(Some) with `location: None`
#[tokio::test]
async fn returns_accommodation_without_location() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_accommodation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let accommodation = factory::create_accommodation(db, user.id).await?;

    let repo = AccommodationRepository::new(db);
    let result = repo.get_by_id(accommodation.id).await?.unwrap();

    assert!(result.location.is_none());

    Ok(())
}

/// Tests getting an accommodation that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_accommodation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AccommodationRepository::new(db);
    let result = repo.get_by_id(42).await?;

    assert!(result.is_none());

    Ok(())
}
