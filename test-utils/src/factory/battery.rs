//! Battery factory for creating test battery entities.

use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::fixture;

/// Factory for creating test batteries attached to an existing station.
pub struct BatteryFactory<'a> {
    db: &'a DatabaseConnection,
    capacity: String,
    installation_date: NaiveDate,
    station_id: i32,
}

impl<'a> BatteryFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, station_id: i32) -> Self {
        Self {
            db,
            capacity: "10kWh".to_string(),
            installation_date: fixture::station::default_installation_date(),
            station_id,
        }
    }

    pub fn capacity(mut self, capacity: impl Into<String>) -> Self {
        self.capacity = capacity.into();
        self
    }

    pub fn installation_date(mut self, installation_date: NaiveDate) -> Self {
        self.installation_date = installation_date;
        self
    }

    /// Builds and inserts the battery entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::battery::Model)` - Created battery entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::battery::Model, DbErr> {
        entity::battery::ActiveModel {
            id: ActiveValue::NotSet,
            capacity: ActiveValue::Set(self.capacity),
            installation_date: ActiveValue::Set(self.installation_date),
            station_id: ActiveValue::Set(self.station_id),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a battery with default values at the given station.
pub async fn create_battery(
    db: &DatabaseConnection,
    station_id: i32,
) -> Result<entity::battery::Model, DbErr> {
    BatteryFactory::new(db, station_id).build().await
}
