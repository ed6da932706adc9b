use super::*;

/// Tests deleting an accommodation together with its location.
///
/// Expected: Ok(true) with both rows removed
#[tokio::test]
async fn deletes_accommodation_and_location() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_accommodation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, accommodation, location) =
        factory::helpers::create_accommodation_with_dependencies(db).await?;

    let repo = AccommodationRepository::new(db);
    let deleted = repo.delete(accommodation.id).await?;

    assert!(deleted);
    assert!(entity::prelude::Accommodation::find_by_id(accommodation.id)
        .one(db)
        .await?
        .is_none());
    assert!(entity::prelude::Location::find_by_id(location.id)
        .one(db)
        .await?
        .is_none());

    Ok(())
}

/// Tests that a second delete of the same ID reports nothing deleted.
///
/// Expected: Ok(true) then Ok(false)
#[tokio::test]
async fn second_delete_reports_missing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_accommodation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, accommodation, _location) =
        factory::helpers::create_accommodation_with_dependencies(db).await?;

    let repo = AccommodationRepository::new(db);

    assert!(repo.delete(accommodation.id).await?);
    assert!(!repo.delete(accommodation.id).await?);

    Ok(())
}

/// Tests that deleting one accommodation leaves others intact.
///
/// Expected: Ok(true) with the other listing and its location still present
#[tokio::test]
async fn leaves_other_accommodations_untouched() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_accommodation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let (first, _) = factory::create_accommodation_with_location(db, user.id).await?;
    let (second, second_location) =
        factory::create_accommodation_with_location(db, user.id).await?;

    let repo = AccommodationRepository::new(db);
    repo.delete(first.id).await?;

    assert!(repo.exists(second.id).await?);
    assert!(entity::prelude::Location::find_by_id(second_location.id)
        .one(db)
        .await?
        .is_some());

    Ok(())
}
