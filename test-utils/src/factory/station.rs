//! Station factory for creating test station entities.

use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::fixture;

/// Factory for creating test stations with customizable fields.
///
/// Defaults are sourced from `fixture::station`. The location must already exist.
///
/// # Example
///
/// ```rust,ignore
/// let station = StationFactory::new(&db, location.id)
///     .total_capacity(250.0)
///     .build()
///     .await?;
/// ```
pub struct StationFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::station::Model,
}

impl<'a> StationFactory<'a> {
    /// Creates a new StationFactory with default values from fixture.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `location_id` - ID of the location the station is installed at
    pub fn new(db: &'a DatabaseConnection, location_id: i32) -> Self {
        let entity = fixture::station::entity_builder()
            .location_id(location_id)
            .build();

        Self { db, entity }
    }

    pub fn total_capacity(mut self, total_capacity: f64) -> Self {
        self.entity.total_capacity = total_capacity;
        self
    }

    pub fn installation_date(mut self, installation_date: NaiveDate) -> Self {
        self.entity.installation_date = installation_date;
        self
    }

    /// Builds and inserts the station entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::station::Model)` - Created station entity
    /// - `Err(DbErr)` - Database error during insert (e.g. unknown location)
    pub async fn build(self) -> Result<entity::station::Model, DbErr> {
        entity::station::ActiveModel {
            id: ActiveValue::NotSet,
            total_capacity: ActiveValue::Set(self.entity.total_capacity),
            installation_date: ActiveValue::Set(self.entity.installation_date),
            location_id: ActiveValue::Set(self.entity.location_id),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a station with default values at the given location.
///
/// Shorthand for `StationFactory::new(db, location_id).build().await`.
pub async fn create_station_at(
    db: &DatabaseConnection,
    location_id: i32,
) -> Result<entity::station::Model, DbErr> {
    StationFactory::new(db, location_id).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use crate::factory::location::create_location;

    #[tokio::test]
    async fn creates_station_with_defaults() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_station_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let location = create_location(db).await?;
        let station = create_station_at(db, location.id).await?;

        assert_eq!(station.location_id, location.id);
        assert_eq!(
            station.total_capacity,
            fixture::station::DEFAULT_TOTAL_CAPACITY
        );

        Ok(())
    }

    #[tokio::test]
    async fn fails_for_missing_location() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_station_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let result = create_station_at(db, 999).await;

        assert!(result.is_err());

        Ok(())
    }
}
