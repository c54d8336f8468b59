use super::*;

/// Tests deleting an existing row.
///
/// Expected: Ok(()) and a subsequent find_by_id returns NotFound
#[tokio::test]
async fn deletes_station() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_station_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let station = factory::create_station(db).await?;

    let repo = StationRepository::new(db);
    repo.delete(station.id).await?;

    let result = repo.find_by_id(station.id).await;
    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests deleting a row that does not exist.
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

    let result = StationRepository::new(db).delete(12).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests that deleting a station cascades to the rows that reference it.
///
/// Expected: the station's batteries are gone as well
#[tokio::test]
async fn cascades_to_batteries() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_solar_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let station = factory::create_station(db).await?;
    let battery = factory::create_battery(db, station.id).await?;

    StationRepository::new(db).delete(station.id).await?;

    let result = BatteryRepository::new(db).find_by_id(battery.id).await;
    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
