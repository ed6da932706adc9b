use super::*;

/// Tests that only the owner's accommodations are returned, in insertion order.
///
/// Expected: Ok with the owner's two accommodations ordered by ID
#[tokio::test]
async fn returns_owned_accommodations_in_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_accommodation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;

    let first = factory::accommodation::AccommodationFactory::new(db, owner.id)
        .name("First lodge in town")
        .build()
        .await?;
    factory::create_location(db, first.id).await?;
    factory::create_accommodation_with_location(db, other.id).await?;
    let second = factory::accommodation::AccommodationFactory::new(db, owner.id)
        .name("Second lodge in town")
        .build()
        .await?;
    factory::create_location(db, second.id).await?;

    let repo = AccommodationRepository::new(db);
    let results = repo.get_by_user(owner.id).await?;

    let ids: Vec<i32> = results.iter().map(|r| r.accommodation.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);
    assert!(results.iter().all(|r| r.location.is_some()));

    Ok(())
}

/// Tests listing for a user without accommodations.
///
/// Expected: Ok with empty list
#[tokio::test]
async fn returns_empty_list_without_accommodations() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_accommodation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = AccommodationRepository::new(db);
    let results = repo.get_by_user(user.id).await?;

    assert!(results.is_empty());

    Ok(())
}
