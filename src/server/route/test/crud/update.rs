use super::*;

/// Tests replacing a station with PUT.
///
/// Expected: 200 "Station updated", then GET reflects every new value
#[tokio::test]
async fn put_replaces_station() -> Result<(), AppError> {
    let (app, db) = app().await;
    let station = factory::create_station(&db).await?;
    let other_location = factory::create_location(&db).await?;

    let (status, body) = send(
        &app,
        Method::PUT,
        &format!("/stations/{}", station.id),
        Some(json!({
            "total_capacity": 55.0,
            "installation_date": "2024-02-29",
            "location_id": other_location.id
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(text(&body), "Station updated");

    let (_, body) = send(&app, Method::GET, &format!("/stations/{}", station.id), None).await;
    let fetched: StationDto = parse(&body);
    assert_eq!(fetched.total_capacity, 55.0);
    assert_eq!(fetched.installation_date.to_string(), "2024-02-29");
    assert_eq!(fetched.location_id, other_location.id);

    Ok(())
}

/// Tests that PATCH only changes the fields present in the payload.
///
/// Expected: 200 "Owner updated", surname changed, name and contact number kept
#[tokio::test]
async fn patch_changes_only_given_fields() -> Result<(), AppError> {
    let (app, db) = app().await;
    let owner = factory::create_owner(&db).await?;

    let (status, body) = send(
        &app,
        Method::PATCH,
        &format!("/owners/{}", owner.id),
        Some(json!({ "surname": "Lovelace" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(text(&body), "Owner updated");

    let (_, body) = send(&app, Method::GET, &format!("/owners/{}", owner.id), None).await;
    let fetched: OwnerDto = parse(&body);
    assert_eq!(fetched.surname, "Lovelace");
    assert_eq!(fetched.name, owner.name);
    assert_eq!(fetched.contact_number, owner.contact_number);

    Ok(())
}

/// Tests updating a row that does not exist.
///
/// Expected: 404 for both PUT and PATCH
#[tokio::test]
async fn update_of_missing_row_is_not_found() -> Result<(), AppError> {
    let (app, _db) = app().await;

    let (status, _) = send(
        &app,
        Method::PUT,
        "/locations/77",
        Some(json!({ "city": "Oslo", "street": "Karl Johans gate" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(
        &app,
        Method::PATCH,
        "/locations/77",
        Some(json!({ "city": "Oslo" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    Ok(())
}
