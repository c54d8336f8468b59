use super::*;

/// Tests filtering batteries by station.
///
/// Creates batteries at two stations and verifies that only the batteries of the
/// requested station are returned, in id order.
///
/// Expected: Ok(Vec) with exactly the first station's batteries
#[tokio::test]
async fn finds_batteries_of_station() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_solar_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let station = factory::create_station(db).await?;
    let other_station = factory::create_station(db).await?;
    let first = factory::create_battery(db, station.id).await?;
    factory::create_battery(db, other_station.id).await?;
    let second = factory::create_battery(db, station.id).await?;

    let batteries = BatteryRepository::new(db).find_by_station(station.id).await?;

    let ids: Vec<i32> = batteries.iter().map(|b| b.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);
    assert!(batteries.iter().all(|b| b.station_id == station.id));

    Ok(())
}

/// Tests filtering by a station without batteries.
///
/// Expected: Ok(empty Vec)
#[tokio::test]
async fn returns_empty_for_station_without_batteries() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_solar_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let station = factory::create_station(db).await?;

    let batteries = BatteryRepository::new(db).find_by_station(station.id).await?;

    assert!(batteries.is_empty());

    Ok(())
}

/// Tests filtering battery charge readings by battery.
///
/// Expected: Ok(Vec) with only the readings of the requested battery
#[tokio::test]
async fn finds_levels_of_battery() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_solar_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let station = factory::create_station(db).await?;
    let battery = factory::create_battery(db, station.id).await?;
    let other_battery = factory::create_battery(db, station.id).await?;

    let repo = BatteryLevelRepository::new(db);
    let level = repo
        .create(BatteryLevelParam {
            date_time: timestamp(5, 10),
            charge_level: 80.0,
            battery_id: battery.id,
        })
        .await?;
    repo.create(BatteryLevelParam {
        date_time: timestamp(5, 11),
        charge_level: 20.0,
        battery_id: other_battery.id,
    })
    .await?;

    let levels = repo.find_by_battery(battery.id).await?;

    assert_eq!(levels, vec![level]);

    Ok(())
}
