use super::*;

/// Tests filtering energy sales by station.
///
/// Expected: Ok(Vec) with only the requested station's sales
#[tokio::test]
async fn finds_sales_of_station() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_solar_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let station = factory::create_station(db).await?;
    let other_station = factory::create_station(db).await?;
    let sale = factory::create_energy_sale(db, station.id).await?;
    factory::create_energy_sale(db, other_station.id).await?;

    let sales = EnergySaleRepository::new(db).find_by_station(station.id).await?;

    assert_eq!(sales.len(), 1);
    assert_eq!(sales[0].id, sale.id);
    assert_eq!(sales[0].station_id, station.id);

    Ok(())
}
