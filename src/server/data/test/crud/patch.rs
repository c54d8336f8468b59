use super::*;

/// Tests that a partial update changes only the provided fields.
///
/// Expected: Ok(()) with total_capacity changed and the other fields untouched
#[tokio::test]
async fn changes_only_provided_fields() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_station_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let station = factory::create_station(db).await?;

    let repo = StationRepository::new(db);
    repo.patch(
        station.id,
        PatchStationParam {
            total_capacity: Some(999.9),
            ..Default::default()
        },
    )
    .await?;

    let patched = repo.find_by_id(station.id).await?;
    assert_eq!(patched.total_capacity, 999.9);
    assert_eq!(patched.installation_date, station.installation_date);
    assert_eq!(patched.location_id, station.location_id);

    Ok(())
}

/// Tests that an empty patch is accepted and leaves the row as it was.
///
/// Expected: Ok(()) with no field changed
#[tokio::test]
async fn accepts_empty_patch() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_station_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let station = factory::create_station(db).await?;

    let repo = StationRepository::new(db);
    repo.patch(station.id, PatchStationParam::default()).await?;

    let unchanged = repo.find_by_id(station.id).await?;
    assert_eq!(unchanged.total_capacity, station.total_capacity);
    assert_eq!(unchanged.location_id, station.location_id);

    Ok(())
}

/// Tests patching a row that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_for_missing_station() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_station_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = StationRepository::new(db)
        .patch(
            5,
            PatchStationParam {
                total_capacity: Some(1.0),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
