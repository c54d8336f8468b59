use super::*;

/// Tests the monthly aggregate.
///
/// Two sales of 100 in January 2023 and one of 50 in February 2023 must yield two
/// buckets in ascending order.
///
/// Expected: [("2023-01", 200.0), ("2023-02", 50.0)]
#[tokio::test]
async fn sums_sales_per_month() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_solar_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let station = factory::create_station(db).await?;
    EnergySaleFactory::new(db, station.id)
        .date_time(timestamp(2023, 2, 3))
        .energy_sold(50.0)
        .build()
        .await?;
    EnergySaleFactory::new(db, station.id)
        .date_time(timestamp(2023, 1, 1))
        .energy_sold(100.0)
        .build()
        .await?;
    EnergySaleFactory::new(db, station.id)
        .date_time(timestamp(2023, 1, 15))
        .energy_sold(100.0)
        .build()
        .await?;

    let totals = EnergySaleRepository::new(db)
        .energy_sold_by_period(SalePeriod::Monthly)
        .await?;

    assert_eq!(totals.len(), 2);
    assert_eq!(totals[0].period, "2023-01");
    assert_eq!(totals[0].energy_sold, 200.0);
    assert_eq!(totals[1].period, "2023-02");
    assert_eq!(totals[1].energy_sold, 50.0);

    Ok(())
}

/// Tests the daily and yearly aggregates across stations.
///
/// Expected: daily keys per calendar day, a single yearly bucket per year
#[tokio::test]
async fn sums_sales_per_day_and_year() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_solar_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let station = factory::create_station(db).await?;
    let other_station = factory::create_station(db).await?;
    EnergySaleFactory::new(db, station.id)
        .date_time(timestamp(2022, 12, 31))
        .energy_sold(10.0)
        .build()
        .await?;
    EnergySaleFactory::new(db, station.id)
        .date_time(timestamp(2023, 1, 1))
        .energy_sold(20.0)
        .build()
        .await?;
    EnergySaleFactory::new(db, other_station.id)
        .date_time(timestamp(2023, 1, 1))
        .energy_sold(5.0)
        .build()
        .await?;

    let repo = EnergySaleRepository::new(db);

    let daily = repo.energy_sold_by_period(SalePeriod::Daily).await?;
    let daily: Vec<(String, f64)> = daily
        .into_iter()
        .map(|t| (t.period, t.energy_sold))
        .collect();
    assert_eq!(
        daily,
        vec![
            ("2022-12-31".to_string(), 10.0),
            ("2023-01-01".to_string(), 25.0)
        ]
    );

    let yearly = repo.energy_sold_by_period(SalePeriod::Yearly).await?;
    let yearly: Vec<(String, f64)> = yearly
        .into_iter()
        .map(|t| (t.period, t.energy_sold))
        .collect();
    assert_eq!(
        yearly,
        vec![("2022".to_string(), 10.0), ("2023".to_string(), 25.0)]
    );

    Ok(())
}

/// Tests the aggregate over an empty table.
///
/// Expected: Ok(empty Vec)
#[tokio::test]
async fn returns_empty_without_sales() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_solar_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let totals = EnergySaleRepository::new(db)
        .energy_sold_by_period(SalePeriod::Yearly)
        .await?;

    assert!(totals.is_empty());

    Ok(())
}
