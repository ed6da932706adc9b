use super::*;

/// Tests booking an accommodation with availability 15.
///
/// Expected: 204 and availability 14 afterwards
#[tokio::test]
async fn decrements_availability() -> Result<(), DbErr> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let accommodation = factory::accommodation::AccommodationFactory::new(db, user.id)
        .availability(15)
        .build()
        .await?;
    factory::create_location(db, accommodation.id).await?;

    let response = send(
        db,
        Method::POST,
        &format!("/api/accommodations/{}/book", accommodation.id),
        Some(&user.api_token),
        None,
    )
    .await;

    assert_eq!(response.status, StatusCode::NO_CONTENT);
    let stored = entity::prelude::Accommodation::find_by_id(accommodation.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.availability, 14);

    Ok(())
}

/// Tests booking an unknown ID.
///
/// Expected: 404 NotFound problem
#[tokio::test]
async fn unknown_id_is_not_found() -> Result<(), DbErr> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;

    let response = send(
        db,
        Method::POST,
        "/api/accommodations/999/book",
        Some(&user.api_token),
        None,
    )
    .await;

    assert_problem(&response, StatusCode::NOT_FOUND, "NotFound");

    Ok(())
}
