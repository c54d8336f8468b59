use super::*;
use crate::model::energy_sale::{EnergySaleDto, EnergySoldDto};
use chrono::NaiveDate;
use test_utils::factory::energy_sale::EnergySaleFactory;

fn at(year: i32, month: u32, day: u32) -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

/// Tests the monthly aggregate.
///
/// Two sales of 100 in January and one of 50 in February.
///
/// Expected: 200 with [("2023-01", 200), ("2023-02", 50)]
#[tokio::test]
async fn calculates_energy_sold_monthly() -> Result<(), AppError> {
    let (app, db) = app().await;
    let station = factory::create_station(&db).await?;
    for (date_time, energy) in [
        (at(2023, 1, 1), 100.0),
        (at(2023, 1, 15), 100.0),
        (at(2023, 2, 3), 50.0),
    ] {
        EnergySaleFactory::new(&db, station.id)
            .date_time(date_time)
            .energy_sold(energy)
            .build()
            .await?;
    }

    let (status, body) = send(
        &app,
        Method::GET,
        "/energy-sales/calculate-energy-sold/monthly",
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let totals: Vec<EnergySoldDto> = parse(&body);
    assert_eq!(
        totals,
        vec![
            EnergySoldDto {
                period: "2023-01".to_string(),
                energy_sold: 200.0
            },
            EnergySoldDto {
                period: "2023-02".to_string(),
                energy_sold: 50.0
            },
        ]
    );

    Ok(())
}

/// Tests the monthly aggregate over sales posted with bare dates.
///
/// A date without a time is stored as midnight of that day.
///
/// Expected: 201 for both sales, then [("2023-01", 200)]
#[tokio::test]
async fn sums_sales_posted_with_bare_dates() -> Result<(), AppError> {
    let (app, db) = app().await;
    let station = factory::create_station(&db).await?;

    for date in ["2023-01-01", "2023-01-15"] {
        let (status, body) = send(
            &app,
            Method::POST,
            "/energy-sales",
            Some(json!({
                "energy_sold": 100.0,
                "price_per_kwh": 0.25,
                "date_time": date,
                "station_id": station.id
            })),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        let raw: Value = parse(&body);
        assert_eq!(raw["date_time"], format!("{} 00:00:00", date));
    }

    let (status, body) = send(
        &app,
        Method::GET,
        "/energy-sales/calculate-energy-sold/monthly",
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        parse::<Vec<EnergySoldDto>>(&body),
        vec![EnergySoldDto {
            period: "2023-01".to_string(),
            energy_sold: 200.0
        }]
    );

    Ok(())
}

/// Tests an unknown aggregation period.
///
/// Expected: 400 with an ErrorDto body
#[tokio::test]
async fn rejects_unknown_period() -> Result<(), AppError> {
    let (app, _db) = app().await;

    let (status, body) = send(
        &app,
        Method::GET,
        "/energy-sales/calculate-energy-sold/weekly",
        None,
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error: ErrorDto = parse(&body);
    assert!(error.error.contains("weekly"));

    Ok(())
}

/// Tests the datetime wire format of a created sale.
///
/// Accepts the `T` separator on input and emits a space separator.
///
/// Expected: 201 with date_time serialized as "2023-01-05 10:00:00"
#[tokio::test]
async fn emits_datetime_with_space_separator() -> Result<(), AppError> {
    let (app, db) = app().await;
    let station = factory::create_station(&db).await?;

    let (status, body) = send(
        &app,
        Method::POST,
        "/energy-sales",
        Some(json!({
            "energy_sold": 12.5,
            "price_per_kwh": 0.3,
            "date_time": "2023-01-05T10:00:00",
            "station_id": station.id
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    let raw: Value = parse(&body);
    assert_eq!(raw["date_time"], "2023-01-05 10:00:00");

    let (_, body) = send(
        &app,
        Method::GET,
        &format!("/energy-sales/get-energy-sales-after-station/{}", station.id),
        None,
    )
    .await;
    let sales: Vec<EnergySaleDto> = parse(&body);
    assert_eq!(sales.len(), 1);
    assert_eq!(sales[0].energy_sold, 12.5);

    Ok(())
}
