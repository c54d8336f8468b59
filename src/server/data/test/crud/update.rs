use super::*;

/// Tests replacing every field of a station.
///
/// Expected: Ok(()) and a subsequent read reflects exactly the new values
#[tokio::test]
async fn replaces_all_fields() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_station_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let station = factory::create_station(db).await?;
    let other_location = factory::create_location(db).await?;

    let repo = StationRepository::new(db);
    repo.update(
        station.id,
        StationParam {
            total_capacity: 321.0,
            installation_date: date(2024, 6, 1),
            location_id: other_location.id,
        },
    )
    .await?;

    let updated = repo.find_by_id(station.id).await?;
    assert_eq!(updated.total_capacity, 321.0);
    assert_eq!(updated.installation_date, date(2024, 6, 1));
    assert_eq!(updated.location_id, other_location.id);

    Ok(())
}

/// Tests updating a row that does not exist.
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

    let location = factory::create_location(db).await?;

    let result = StationRepository::new(db)
        .update(
            77,
            StationParam {
                total_capacity: 1.0,
                installation_date: date(2024, 1, 1),
                location_id: location.id,
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests that replacing a foreign key with a dangling one is rejected.
///
/// Expected: Err(AppError::BadRequest) and the stored row is unchanged
#[tokio::test]
async fn rejects_dangling_location() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_station_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let station = factory::create_station(db).await?;

    let repo = StationRepository::new(db);
    let result = repo
        .update(
            station.id,
            StationParam {
                total_capacity: 1.0,
                installation_date: date(2024, 1, 1),
                location_id: 999,
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert_eq!(
        repo.find_by_id(station.id).await?.location_id,
        station.location_id
    );

    Ok(())
}
