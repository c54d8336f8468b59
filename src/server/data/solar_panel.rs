use crate::server::{
    data::crud::CrudRepository,
    error::AppError,
    model::solar_panel::{SolarPanel, SolarPanelResource},
};

pub type SolarPanelRepository<'a> = CrudRepository<'a, SolarPanelResource>;

impl<'a> SolarPanelRepository<'a> {
    /// Gets all solar panels of a panel type, ordered by id.
    ///
    /// # Arguments
    /// - `panel_type_id` - ID of the panel type
    ///
    /// # Returns
    /// - `Ok(Vec<SolarPanel>)` - Matching panels (empty if none)
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn find_by_panel_type(&self, panel_type_id: i32) -> Result<Vec<SolarPanel>, AppError> {
        self.find_by_column(entity::solar_panel::Column::PanelTypeId, panel_type_id)
            .await
    }

    /// Gets all solar panels mounted at a station, ordered by id.
    ///
    /// # Arguments
    /// - `station_id` - ID of the station
    ///
    /// # Returns
    /// - `Ok(Vec<SolarPanel>)` - Matching panels (empty if none)
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn find_by_station(&self, station_id: i32) -> Result<Vec<SolarPanel>, AppError> {
        self.find_by_column(entity::solar_panel::Column::StationId, station_id)
            .await
    }
}
