use super::*;

/// Tests filtering solar panels by panel type and by station.
///
/// Expected: each filter returns only the panels matching its column
#[tokio::test]
async fn finds_panels_by_type_and_station() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_solar_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let station = factory::create_station(db).await?;
    let other_station = factory::create_station(db).await?;
    let mono = factory::create_panel_type(db).await?;
    let thin_film = factory::create_panel_type(db).await?;

    let a = factory::create_solar_panel(db, mono.id, station.id).await?;
    let b = factory::create_solar_panel(db, thin_film.id, station.id).await?;
    let c = factory::create_solar_panel(db, mono.id, other_station.id).await?;

    let repo = SolarPanelRepository::new(db);

    let by_type: Vec<i32> = repo
        .find_by_panel_type(mono.id)
        .await?
        .iter()
        .map(|p| p.id)
        .collect();
    assert_eq!(by_type, vec![a.id, c.id]);

    let by_station: Vec<i32> = repo
        .find_by_station(station.id)
        .await?
        .iter()
        .map(|p| p.id)
        .collect();
    assert_eq!(by_station, vec![a.id, b.id]);

    Ok(())
}

/// Tests filtering panel angles and productions by solar panel.
///
/// Expected: only the readings recorded for the requested panel
#[tokio::test]
async fn finds_readings_of_solar_panel() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_solar_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (station, panel_type, panel) =
        factory::helpers::create_solar_panel_with_dependencies(db).await?;
    let other_panel = factory::create_solar_panel(db, panel_type.id, station.id).await?;

    let angles = PanelAngleRepository::new(db);
    let angle = angles
        .create(PanelAngleParam {
            date_time: timestamp(2, 9),
            angle: 35.0,
            solar_panel_id: panel.id,
        })
        .await?;
    angles
        .create(PanelAngleParam {
            date_time: timestamp(2, 9),
            angle: 12.0,
            solar_panel_id: other_panel.id,
        })
        .await?;

    let productions = PanelProductionRepository::new(db);
    let production = productions
        .create(PanelProductionParam {
            date_time: timestamp(2, 12),
            production: 4.2,
            solar_panel_id: panel.id,
        })
        .await?;

    assert_eq!(angles.find_by_solar_panel(panel.id).await?, vec![angle]);
    assert_eq!(
        productions.find_by_solar_panel(panel.id).await?,
        vec![production]
    );
    assert!(productions
        .find_by_solar_panel(other_panel.id)
        .await?
        .is_empty());

    Ok(())
}
