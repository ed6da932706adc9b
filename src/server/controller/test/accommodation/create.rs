use super::*;

/// Tests creating an accommodation from a valid payload.
///
/// Expected: 201 with the resource, and show returns the same fields
#[tokio::test]
async fn creates_accommodation_and_shows_it() -> Result<(), DbErr> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;

    let response = send(
        db,
        Method::POST,
        "/api/accommodations",
        Some(&user.api_token),
        Some(payload::valid()),
    )
    .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body, json!({ "data": expected_resource() }));

    let created = entity::prelude::Accommodation::find()
        .one(db)
        .await?
        .unwrap();
    assert_eq!(created.user_id, user.id);

    let shown = send(
        db,
        Method::GET,
        &format!("/api/accommodations/{}", created.id),
        Some(&user.api_token),
        None,
    )
    .await;

    assert_eq!(shown.status, StatusCode::OK);
    assert_eq!(shown.body, response.body);

    Ok(())
}

/// Tests that a name containing a blocklisted word is rejected.
///
/// Expected: 422 ValidationError with invalid-params.name
#[tokio::test]
async fn rejects_blocklisted_name() -> Result<(), DbErr> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;

    let response = send(
        db,
        Method::POST,
        "/api/accommodations",
        Some(&user.api_token),
        Some(payload::valid_with("name", json!("Limited Offer"))),
    )
    .await;

    assert_problem(&response, StatusCode::UNPROCESSABLE_ENTITY, "ValidationError");
    assert_eq!(response.body["detail"], "The given data was invalid.");
    assert_eq!(
        response.body["invalid-params"],
        json!({ "name": ["The name format is invalid."] })
    );
    assert_eq!(entity::prelude::Accommodation::find().count(db).await?, 0);

    Ok(())
}

/// Tests that a badge inconsistent with the reputation is rejected.
///
/// Expected: 422 ValidationError with invalid-params.reputation_badge
#[tokio::test]
async fn rejects_inconsistent_reputation_badge() -> Result<(), DbErr> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;

    let mut body = payload::valid();
    body["reputation"] = json!(600);
    body["reputationBadge"] = json!("red");

    let response = send(
        db,
        Method::POST,
        "/api/accommodations",
        Some(&user.api_token),
        Some(body),
    )
    .await;

    assert_problem(&response, StatusCode::UNPROCESSABLE_ENTITY, "ValidationError");
    assert_eq!(
        response.body["invalid-params"],
        json!({ "reputation_badge": ["reputation_badge is invalid."] })
    );

    Ok(())
}

/// Tests that a zip code with the wrong number of digits is rejected.
///
/// Expected: 422 ValidationError with invalid-params["location.zip_code"]
#[tokio::test]
async fn rejects_short_zip_code() -> Result<(), DbErr> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;

    let response = send(
        db,
        Method::POST,
        "/api/accommodations",
        Some(&user.api_token),
        Some(payload::valid_with_location("zip_code", json!(2448))),
    )
    .await;

    assert_problem(&response, StatusCode::UNPROCESSABLE_ENTITY, "ValidationError");
    assert_eq!(
        response.body["invalid-params"]["location.zip_code"],
        json!(["The location.zip code must be 5 digits."])
    );

    Ok(())
}

/// Tests that a zip code with a leading zero round-trips as text.
///
/// Expected: 201 with zip_code "02448"
#[tokio::test]
async fn keeps_leading_zero_in_zip_code() -> Result<(), DbErr> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;

    let response = send(
        db,
        Method::POST,
        "/api/accommodations",
        Some(&user.api_token),
        Some(payload::valid_with_location("zip_code", json!("02448"))),
    )
    .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["data"]["location"]["zip_code"], "02448");

    Ok(())
}

/// Tests that an empty object reports every field at once.
///
/// Expected: 422 with thirteen invalid fields
#[tokio::test]
async fn reports_all_missing_fields() -> Result<(), DbErr> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;

    let response = send(
        db,
        Method::POST,
        "/api/accommodations",
        Some(&user.api_token),
        Some(json!({})),
    )
    .await;

    assert_problem(&response, StatusCode::UNPROCESSABLE_ENTITY, "ValidationError");
    let invalid = response.body["invalid-params"].as_object().unwrap();
    assert_eq!(invalid.len(), 13);
    assert_eq!(
        invalid["image_url"],
        json!(["The image url field is required."])
    );

    Ok(())
}

/// Tests a body that is not JSON.
///
/// Expected: 400 BadRequest problem
#[tokio::test]
async fn rejects_malformed_json() -> Result<(), DbErr> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/accommodations")
        .header(header::AUTHORIZATION, format!("Bearer {}", user.api_token))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{ not json"))
        .unwrap();
    let response = into_test_response(app(db).oneshot(request).await.unwrap()).await;

    assert_problem(&response, StatusCode::BAD_REQUEST, "BadRequest");

    Ok(())
}

/// Tests creating without a bearer token.
///
/// Expected: 401 before validation runs
#[tokio::test]
async fn requires_authentication() -> Result<(), DbErr> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();

    let response = send(
        db,
        Method::POST,
        "/api/accommodations",
        None,
        Some(json!({})),
    )
    .await;

    assert_problem(&response, StatusCode::UNAUTHORIZED, "Unauthenticated");

    Ok(())
}
