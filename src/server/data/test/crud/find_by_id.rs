use super::*;

/// Tests getting an existing row by id.
///
/// Expected: Ok(Station) matching the inserted row
#[tokio::test]
async fn finds_existing_station() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_station_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let inserted = factory::create_station(db).await?;

    let station = StationRepository::new(db).find_by_id(inserted.id).await?;

    assert_eq!(station.id, inserted.id);
    assert_eq!(station.total_capacity, inserted.total_capacity);
    assert_eq!(station.location_id, inserted.location_id);

    Ok(())
}

/// Tests the not-found path for several resource types.
///
/// Every resource shares the same repository so a missing id is reported uniformly,
/// with the resource name in the message.
///
/// Expected: Err(AppError::NotFound) for each resource
#[tokio::test]
async fn reports_missing_id_for_every_resource() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_solar_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let station = StationRepository::new(db).find_by_id(404).await;
    let battery = BatteryRepository::new(db).find_by_id(404).await;
    let sale = EnergySaleRepository::new(db).find_by_id(404).await;
    let owner = CrudRepository::<OwnerResource>::new(db).find_by_id(404).await;
    let panel_type = CrudRepository::<PanelTypeResource>::new(db)
        .find_by_id(404)
        .await;

    match station {
        Err(AppError::NotFound(msg)) => assert_eq!(msg, "Station with id 404 not found"),
        other => panic!("expected NotFound, got {:?}", other),
    }
    assert!(matches!(battery, Err(AppError::NotFound(_))));
    assert!(matches!(sale, Err(AppError::NotFound(_))));
    assert!(matches!(owner, Err(AppError::NotFound(_))));
    assert!(matches!(panel_type, Err(AppError::NotFound(_))));

    Ok(())
}
