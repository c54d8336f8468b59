use super::*;

/// Tests creating a station over HTTP.
///
/// Verifies that POST answers 201 with the stored row and that the returned id can be
/// fetched back with identical content.
///
/// Expected: 201 then 200 with the same StationDto
#[tokio::test]
async fn creates_station_and_reads_it_back() -> Result<(), AppError> {
    let (app, db) = app().await;
    let location = factory::create_location(&db).await?;

    let (status, body) = send(
        &app,
        Method::POST,
        "/stations",
        Some(json!({
            "total_capacity": 120.5,
            "installation_date": "2023-04-01",
            "location_id": location.id
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    let created: StationDto = parse(&body);
    assert_eq!(created.total_capacity, 120.5);
    assert_eq!(created.installation_date.to_string(), "2023-04-01");
    assert_eq!(created.location_id, location.id);

    let (status, body) = send(&app, Method::GET, &format!("/stations/{}", created.id), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(parse::<StationDto>(&body), created);

    Ok(())
}

/// Tests creating a location through its dedicated insert.
///
/// Expected: 201 with the city and street of the payload
#[tokio::test]
async fn creates_location() -> Result<(), AppError> {
    let (app, _db) = app().await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/locations",
        Some(json!({ "city": "Lyon", "street": "Rue de la République" })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    let created: LocationDto = parse(&body);
    assert!(created.id > 0);
    assert_eq!(created.city, "Lyon");
    assert_eq!(created.street, "Rue de la République");

    Ok(())
}

/// Tests creating an ownership share through its dedicated insert.
///
/// Expected: 201 with owner, station and percentage of the payload
#[tokio::test]
async fn creates_owner_has_station() -> Result<(), AppError> {
    let (app, db) = app().await;
    let owner = factory::create_owner(&db).await?;
    let station = factory::create_station(&db).await?;

    let (status, body) = send(
        &app,
        Method::POST,
        "/owner-has-stations",
        Some(json!({
            "owner_id": owner.id,
            "station_id": station.id,
            "ownership_percentage": 40.0
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    let created: OwnerHasStationDto = parse(&body);
    assert_eq!(created.owner_id, owner.id);
    assert_eq!(created.station_id, station.id);
    assert_eq!(created.ownership_percentage, 40.0);

    Ok(())
}

/// Tests that a payload referencing a missing parent row is rejected.
///
/// The store's foreign key constraint fails the insert.
///
/// Expected: 400 with an ErrorDto body
#[tokio::test]
async fn rejects_unknown_foreign_key() -> Result<(), AppError> {
    let (app, _db) = app().await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/stations",
        Some(json!({
            "total_capacity": 10.0,
            "installation_date": "2023-04-01",
            "location_id": 999
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error: ErrorDto = parse(&body);
    assert!(!error.error.is_empty());

    Ok(())
}

/// Tests that a body missing required fields is rejected before reaching the store.
///
/// Expected: 400 with an ErrorDto body
#[tokio::test]
async fn rejects_incomplete_body() -> Result<(), AppError> {
    let (app, _db) = app().await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/owners",
        Some(json!({ "name": "Ada" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let _: ErrorDto = parse(&body);

    let (_, body) = send(&app, Method::GET, "/owners", None).await;
    assert!(parse::<Vec<OwnerDto>>(&body).is_empty());

    Ok(())
}
