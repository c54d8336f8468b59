//! Solar panel factory for creating test solar panel entities.

use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::fixture;

/// Factory for creating test solar panels.
///
/// The panel type and station must already exist.
pub struct SolarPanelFactory<'a> {
    db: &'a DatabaseConnection,
    installation_date: NaiveDate,
    panel_type_id: i32,
    station_id: i32,
}

impl<'a> SolarPanelFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, panel_type_id: i32, station_id: i32) -> Self {
        Self {
            db,
            installation_date: fixture::station::default_installation_date(),
            panel_type_id,
            station_id,
        }
    }

    pub fn installation_date(mut self, installation_date: NaiveDate) -> Self {
        self.installation_date = installation_date;
        self
    }

    /// Builds and inserts the solar panel entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::solar_panel::Model)` - Created solar panel entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::solar_panel::Model, DbErr> {
        entity::solar_panel::ActiveModel {
            id: ActiveValue::NotSet,
            installation_date: ActiveValue::Set(self.installation_date),
            panel_type_id: ActiveValue::Set(self.panel_type_id),
            station_id: ActiveValue::Set(self.station_id),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a solar panel with default values.
pub async fn create_solar_panel(
    db: &DatabaseConnection,
    panel_type_id: i32,
    station_id: i32,
) -> Result<entity::solar_panel::Model, DbErr> {
    SolarPanelFactory::new(db, panel_type_id, station_id)
        .build()
        .await
}
