use super::*;

/// Tests inserting a location from city and street.
///
/// Expected: Ok(Location) with an id and the given values, readable by id
#[tokio::test]
async fn inserts_location() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_station_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = LocationRepository::new(db);
    let location = repo
        .insert_location("Gdansk".to_string(), "Dluga 1".to_string())
        .await?;

    assert_eq!(location.city, "Gdansk");
    assert_eq!(location.street, "Dluga 1");
    assert_eq!(repo.find_by_id(location.id).await?, location);

    Ok(())
}
