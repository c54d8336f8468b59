use super::*;

/// Tests filtering stations by location.
///
/// Expected: Ok(Vec) with only the stations installed at the location
#[tokio::test]
async fn finds_stations_at_location() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_station_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let location = factory::create_location(db).await?;
    let first = factory::create_station_at(db, location.id).await?;
    factory::create_station(db).await?;
    let second = factory::create_station_at(db, location.id).await?;

    let stations = StationRepository::new(db)
        .find_by_location(location.id)
        .await?;

    let ids: Vec<i32> = stations.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}
