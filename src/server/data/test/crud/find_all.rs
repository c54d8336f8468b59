use super::*;

/// Tests listing an empty table.
///
/// Expected: Ok(empty Vec)
#[tokio::test]
async fn returns_empty_list_for_empty_table() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_station_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let stations = StationRepository::new(db).find_all().await?;

    assert!(stations.is_empty());

    Ok(())
}

/// Tests that rows are returned in primary key order.
///
/// Expected: Ok(Vec) with ids ascending
#[tokio::test]
async fn returns_rows_in_id_order() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_station_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_station(db).await?;
    let second = factory::create_station(db).await?;
    let third = factory::create_station(db).await?;

    let stations = StationRepository::new(db).find_all().await?;

    let ids: Vec<i32> = stations.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![first.id, second.id, third.id]);

    Ok(())
}
