use crate::server::{
    data::crud::CrudRepository,
    error::AppError,
    model::station::{Station, StationResource},
};

pub type StationRepository<'a> = CrudRepository<'a, StationResource>;

impl<'a> StationRepository<'a> {
    /// Gets all stations installed at a location, ordered by id.
    ///
    /// # Arguments
    /// - `location_id` - ID of the location
    ///
    /// # Returns
    /// - `Ok(Vec<Station>)` - Stations at the location (empty if none)
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn find_by_location(&self, location_id: i32) -> Result<Vec<Station>, AppError> {
        self.find_by_column(entity::station::Column::LocationId, location_id)
            .await
    }
}
