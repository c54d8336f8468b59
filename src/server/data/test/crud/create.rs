use super::*;

/// Tests creating a station through the generic repository.
///
/// Verifies that the returned domain model carries the store-assigned id and every
/// field of the input, and that it can be read back by that id.
///
/// Expected: Ok(Station) equal to a subsequent find_by_id
#[tokio::test]
async fn creates_station_and_assigns_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_station_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let location = factory::create_location(db).await?;

    let repo = StationRepository::new(db);
    let station = repo
        .create(StationParam {
            total_capacity: 150.5,
            installation_date: date(2023, 3, 14),
            location_id: location.id,
        })
        .await?;

    assert!(station.id > 0);
    assert_eq!(station.total_capacity, 150.5);
    assert_eq!(station.installation_date, date(2023, 3, 14));
    assert_eq!(station.location_id, location.id);

    let fetched = repo.find_by_id(station.id).await?;
    assert_eq!(fetched, station);

    Ok(())
}

/// Tests that ids are assigned uniquely across inserts.
///
/// Expected: distinct ids for two otherwise identical inserts
#[tokio::test]
async fn assigns_distinct_ids() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_station_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let location = factory::create_location(db).await?;
    let repo = StationRepository::new(db);
    let param = StationParam {
        total_capacity: 10.0,
        installation_date: date(2023, 1, 1),
        location_id: location.id,
    };

    let first = repo.create(param.clone()).await?;
    let second = repo.create(param).await?;

    assert_ne!(first.id, second.id);

    Ok(())
}

/// Tests that a foreign key referencing a missing row is rejected.
///
/// The store enforces the constraint and the violation surfaces as a client error.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_unknown_location() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_station_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = StationRepository::new(db)
        .create(StationParam {
            total_capacity: 10.0,
            installation_date: date(2023, 1, 1),
            location_id: 999,
        })
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests that a battery referencing a missing station is rejected.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_battery_for_unknown_station() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_solar_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = BatteryRepository::new(db)
        .create(crate::server::model::battery::BatteryParam {
            capacity: "5kWh".to_string(),
            installation_date: date(2023, 1, 1),
            station_id: 42,
        })
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
