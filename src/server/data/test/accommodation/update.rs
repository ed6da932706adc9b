use super::*;
use crate::server::model::accommodation::LocationParams;

fn updated_params() -> AccommodationParams {
    AccommodationParams {
        name: "Renovated mountain lodge".to_string(),
        rating: 3,
        category: Category::Lodge,
        image_url: "https://cdn.example.com/lodge.png".to_string(),
        reputation: 650,
        reputation_badge: ReputationBadge::Yellow,
        price: 450,
        availability: 4,
        location: LocationParams {
            city: "Tepoztlan".to_string(),
            state: "Morelos".to_string(),
            country: "Mexico".to_string(),
            zip_code: "02450".to_string(),
            address: "Avenida del Tepozteco 12".to_string(),
        },
    }
}

/// Tests replacing every field of an accommodation and its location.
///
/// Expected: Ok(Some) with new values and unchanged owner and IDs
#[tokio::test]
async fn replaces_accommodation_and_location() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_accommodation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, accommodation, location) =
        factory::helpers::create_accommodation_with_dependencies(db).await?;

    let repo = AccommodationRepository::new(db);
    let result = repo
        .update(accommodation.id, updated_params())
        .await?
        .unwrap();

    assert_eq!(result.accommodation.id, accommodation.id);
    assert_eq!(result.accommodation.user_id, user.id);
    assert_eq!(result.accommodation.name, "Renovated mountain lodge");
    assert_eq!(result.accommodation.category, "lodge");
    assert_eq!(result.accommodation.reputation_badge, "yellow");
    assert_eq!(result.accommodation.availability, 4);

    let updated_location = result.location.unwrap();
    assert_eq!(updated_location.id, location.id);
    assert_eq!(updated_location.city, "Tepoztlan");
    assert_eq!(updated_location.zip_code, "02450");

    let stored = repo.get_by_id(accommodation.id).await?.unwrap();
    assert_eq!(stored.accommodation.name, "Renovated mountain lodge");
    assert_eq!(stored.location.unwrap().address, "Avenida del Tepozteco 12");

    Ok(())
}

/// Tests that updating recreates a missing location row.
///
/// Expected: Ok(Some) with a new location linked to the accommodation
#[tokio::test]
async fn recreates_missing_location() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_accommodation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let accommodation = factory::create_accommodation(db, user.id).await?;

    let repo = AccommodationRepository::new(db);
    let result = repo
        .update(accommodation.id, updated_params())
        .await?
        .unwrap();

    let location = result.location.unwrap();
    assert_eq!(location.accommodation_id, accommodation.id);
    assert_eq!(entity::prelude::Location::find().count(db).await?, 1);

    Ok(())
}

/// Tests updating an accommodation that does not exist.
///
/// Expected: Ok(None) with nothing inserted
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_accommodation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AccommodationRepository::new(db);
    let result = repo.update(42, updated_params()).await?;

    assert!(result.is_none());
    assert_eq!(entity::prelude::Location::find().count(db).await?, 0);

    Ok(())
}
