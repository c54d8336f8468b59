use super::*;

/// Tests listing the owners of a station.
///
/// Expected: both shares of the station, none of the other station
#[tokio::test]
async fn finds_owners_of_station() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_solar_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let alice = factory::create_owner(db).await?;
    let bob = factory::create_owner(db).await?;
    let station = factory::create_station(db).await?;
    let other_station = factory::create_station(db).await?;

    let repo = OwnerHasStationRepository::new(db);
    repo.insert_owner_has_station(alice.id, station.id, 50.0)
        .await?;
    repo.insert_owner_has_station(bob.id, station.id, 50.0)
        .await?;
    repo.insert_owner_has_station(bob.id, other_station.id, 100.0)
        .await?;

    let shares = repo.find_by_station(station.id).await?;

    let owners: Vec<i32> = shares.iter().map(|s| s.owner_id).collect();
    assert_eq!(owners, vec![alice.id, bob.id]);

    Ok(())
}
