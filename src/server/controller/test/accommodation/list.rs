use super::*;

/// Tests that listing returns only the caller's accommodations.
///
/// Expected: 200 with the caller's two listings in creation order
#[tokio::test]
async fn lists_only_own_accommodations() -> Result<(), DbErr> {
    let test = setup().await;
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

    let response = send(
        db,
        Method::GET,
        "/api/accommodations",
        Some(&owner.api_token),
        None,
    )
    .await;

    assert_eq!(response.status, StatusCode::OK);
    let data = response.body["data"].as_array().unwrap();
    assert_eq!(data.len(), 2);
    assert_eq!(data[0]["name"], "First lodge in town");
    assert_eq!(data[1]["name"], "Second lodge in town");

    Ok(())
}

/// Tests listing for a user without accommodations.
///
/// Expected: 200 with an empty data array
#[tokio::test]
async fn returns_empty_data_array() -> Result<(), DbErr> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;

    let response = send(
        db,
        Method::GET,
        "/api/accommodations",
        Some(&user.api_token),
        None,
    )
    .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!({ "data": [] }));

    Ok(())
}

/// Tests listing with a token that belongs to nobody.
///
/// Expected: 401 Unauthenticated problem
#[tokio::test]
async fn rejects_unknown_token() -> Result<(), DbErr> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();
    factory::create_user(db).await?;

    let response = send(
        db,
        Method::GET,
        "/api/accommodations",
        Some("not-a-token"),
        None,
    )
    .await;

    assert_problem(&response, StatusCode::UNAUTHORIZED, "Unauthenticated");

    Ok(())
}
