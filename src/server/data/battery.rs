use crate::server::{
    data::crud::CrudRepository,
    error::AppError,
    model::battery::{Battery, BatteryResource},
};

pub type BatteryRepository<'a> = CrudRepository<'a, BatteryResource>;

impl<'a> BatteryRepository<'a> {
    /// Gets all batteries installed at a station, ordered by id.
    ///
    /// # Arguments
    /// - `station_id` - ID of the station
    ///
    /// # Returns
    /// - `Ok(Vec<Battery>)` - Batteries of the station (empty if none or unknown station)
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn find_by_station(&self, station_id: i32) -> Result<Vec<Battery>, AppError> {
        self.find_by_column(entity::battery::Column::StationId, station_id)
            .await
    }
}
