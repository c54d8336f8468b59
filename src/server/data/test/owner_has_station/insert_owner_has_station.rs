use super::*;

/// Tests recording an ownership share.
///
/// Expected: Ok(OwnerHasStation) linking the owner and station with the percentage
#[tokio::test]
async fn inserts_share() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_solar_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_owner(db).await?;
    let station = factory::create_station(db).await?;

    let share = OwnerHasStationRepository::new(db)
        .insert_owner_has_station(owner.id, station.id, 60.0)
        .await?;

    assert_eq!(share.owner_id, owner.id);
    assert_eq!(share.station_id, station.id);
    assert_eq!(share.ownership_percentage, 60.0);

    Ok(())
}

/// Tests that a share for a missing owner is rejected.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_unknown_owner() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_solar_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let station = factory::create_station(db).await?;

    let result = OwnerHasStationRepository::new(db)
        .insert_owner_has_station(999, station.id, 50.0)
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
