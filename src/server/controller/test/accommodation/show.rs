use super::*;

/// Tests showing an accommodation of another user.
///
/// Expected: 200, reads are not restricted to the owner
#[tokio::test]
async fn shows_any_accommodation() -> Result<(), DbErr> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();
    let (_owner, accommodation, _location) =
        factory::helpers::create_accommodation_with_dependencies(db).await?;
    let reader = factory::create_user(db).await?;

    let response = send(
        db,
        Method::GET,
        &format!("/api/accommodations/{}", accommodation.id),
        Some(&reader.api_token),
        None,
    )
    .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!({ "data": expected_resource() }));

    Ok(())
}

/// Tests showing an unknown ID.
///
/// Expected: 404 NotFound problem
#[tokio::test]
async fn unknown_id_is_not_found() -> Result<(), DbErr> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;

    let response = send(
        db,
        Method::GET,
        "/api/accommodations/999",
        Some(&user.api_token),
        None,
    )
    .await;

    assert_problem(&response, StatusCode::NOT_FOUND, "NotFound");

    Ok(())
}

/// Tests a non-numeric ID segment.
///
/// Expected: 404 NotFound problem, same as an unknown ID
#[tokio::test]
async fn non_numeric_id_is_not_found() -> Result<(), DbErr> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;

    let response = send(
        db,
        Method::GET,
        "/api/accommodations/abc",
        Some(&user.api_token),
        None,
    )
    .await;

    assert_problem(&response, StatusCode::NOT_FOUND, "NotFound");

    Ok(())
}

/// Tests showing an accommodation whose location row is missing.
///
/// Expected: 500 with a generic problem
#[tokio::test]
async fn missing_location_is_server_error() -> Result<(), DbErr> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let accommodation = factory::create_accommodation(db, user.id).await?;

    let response = send(
        db,
        Method::GET,
        &format!("/api/accommodations/{}", accommodation.id),
        Some(&user.api_token),
        None,
    )
    .await;

    assert_problem(
        &response,
        StatusCode::INTERNAL_SERVER_ERROR,
        "InternalServerError",
    );
    assert_eq!(response.body["detail"], "Server Error");

    Ok(())
}
