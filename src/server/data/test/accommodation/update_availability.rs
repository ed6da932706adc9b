use super::*;

/// Tests overwriting the availability counter.
///
/// Expected: Ok with the new value stored and other fields untouched
#[tokio::test]
async fn overwrites_availability() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_accommodation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let accommodation = factory::accommodation::AccommodationFactory::new(db, user.id)
        .availability(15)
        .build()
        .await?;

    let repo = AccommodationRepository::new(db);
    repo.update_availability(accommodation.id, 14).await?;

    let stored = entity::prelude::Accommodation::find_by_id(accommodation.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.availability, 14);
    assert_eq!(stored.name, accommodation.name);

    Ok(())
}

/// Tests that negative availability is stored without a floor.
///
/// Expected: Ok with -1 stored
#[tokio::test]
async fn stores_negative_availability() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_accommodation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let accommodation = factory::accommodation::AccommodationFactory::new(db, user.id)
        .availability(0)
        .build()
        .await?;

    let repo = AccommodationRepository::new(db);
    repo.update_availability(accommodation.id, -1).await?;

    let stored = entity::prelude::Accommodation::find_by_id(accommodation.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.availability, -1);

    Ok(())
}

/// Tests updating availability of an accommodation that does not exist.
///
/// Expected: Err(RecordNotUpdated)
#[tokio::test]
async fn fails_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_accommodation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AccommodationRepository::new(db);
    let result = repo.update_availability(42, 1).await;

    assert!(matches!(result, Err(DbErr::RecordNotUpdated)));

    Ok(())
}
