//! Energy sale factory for creating test energy sale entities.
//!
//! Defaults are sourced from `fixture::energy_sale`. Override `date_time` and
//! `energy_sold` to set up aggregation scenarios.

use chrono::NaiveDateTime;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::fixture;

/// Factory for creating test energy sales with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let sale = EnergySaleFactory::new(&db, station.id)
///     .energy_sold(50.0)
///     .date_time(timestamp)
///     .build()
///     .await?;
/// ```
pub struct EnergySaleFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::energy_sale::Model,
}

impl<'a> EnergySaleFactory<'a> {
    /// Creates a new EnergySaleFactory with default values from fixture.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `station_id` - ID of the station that sold the energy
    pub fn new(db: &'a DatabaseConnection, station_id: i32) -> Self {
        let entity = fixture::energy_sale::entity_builder()
            .station_id(station_id)
            .build();

        Self { db, entity }
    }

    pub fn energy_sold(mut self, energy_sold: f64) -> Self {
        self.entity.energy_sold = energy_sold;
        self
    }

    pub fn price_per_kwh(mut self, price_per_kwh: f64) -> Self {
        self.entity.price_per_kwh = price_per_kwh;
        self
    }

    pub fn date_time(mut self, date_time: NaiveDateTime) -> Self {
        self.entity.date_time = date_time;
        self
    }

    /// Builds and inserts the energy sale entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::energy_sale::Model)` - Created energy sale entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::energy_sale::Model, DbErr> {
        entity::energy_sale::ActiveModel {
            id: ActiveValue::NotSet,
            energy_sold: ActiveValue::Set(self.entity.energy_sold),
            price_per_kwh: ActiveValue::Set(self.entity.price_per_kwh),
            date_time: ActiveValue::Set(self.entity.date_time),
            station_id: ActiveValue::Set(self.entity.station_id),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an energy sale with default values for the given station.
pub async fn create_energy_sale(
    db: &DatabaseConnection,
    station_id: i32,
) -> Result<entity::energy_sale::Model, DbErr> {
    EnergySaleFactory::new(db, station_id).build().await
}
