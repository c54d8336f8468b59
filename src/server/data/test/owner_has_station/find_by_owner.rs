use super::*;

/// Tests listing the stations an owner holds shares of.
///
/// Expected: only the owner's shares, in id order
#[tokio::test]
async fn finds_stations_of_owner() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_solar_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_owner(db).await?;
    let other_owner = factory::create_owner(db).await?;
    let first = factory::create_station(db).await?;
    let second = factory::create_station(db).await?;

    let repo = OwnerHasStationRepository::new(db);
    repo.insert_owner_has_station(owner.id, first.id, 30.0)
        .await?;
    repo.insert_owner_has_station(other_owner.id, first.id, 70.0)
        .await?;
    repo.insert_owner_has_station(owner.id, second.id, 100.0)
        .await?;

    let stations: Vec<i32> = repo
        .find_by_owner(owner.id)
        .await?
        .iter()
        .map(|s| s.station_id)
        .collect();

    assert_eq!(stations, vec![first.id, second.id]);

    Ok(())
}
