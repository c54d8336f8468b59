use crate::server::{
    data::crud::CrudRepository,
    error::AppError,
    model::owner_has_station::{OwnerHasStation, OwnerHasStationParam, OwnerHasStationResource},
};

pub type OwnerHasStationRepository<'a> = CrudRepository<'a, OwnerHasStationResource>;

impl<'a> OwnerHasStationRepository<'a> {
    /// Gets the ownership shares of a station, i.e. who owns it.
    ///
    /// # Arguments
    /// - `station_id` - ID of the station
    ///
    /// # Returns
    /// - `Ok(Vec<OwnerHasStation>)` - Shares of the station ordered by id
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn find_by_station(&self, station_id: i32) -> Result<Vec<OwnerHasStation>, AppError> {
        self.find_by_column(entity::owner_has_station::Column::StationId, station_id)
            .await
    }

    /// Gets the ownership shares held by an owner, i.e. which stations they own.
    ///
    /// # Arguments
    /// - `owner_id` - ID of the owner
    ///
    /// # Returns
    /// - `Ok(Vec<OwnerHasStation>)` - Shares held by the owner ordered by id
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn find_by_owner(&self, owner_id: i32) -> Result<Vec<OwnerHasStation>, AppError> {
        self.find_by_column(entity::owner_has_station::Column::OwnerId, owner_id)
            .await
    }

    /// Records that an owner holds a share of a station.
    ///
    /// # Arguments
    /// - `owner_id` - ID of an existing owner
    /// - `station_id` - ID of an existing station
    /// - `ownership_percentage` - Share of the station held by the owner
    ///
    /// # Returns
    /// - `Ok(OwnerHasStation)` - The created share including its assigned id
    /// - `Err(AppError::BadRequest)` - Owner or station does not exist
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn insert_owner_has_station(
        &self,
        owner_id: i32,
        station_id: i32,
        ownership_percentage: f64,
    ) -> Result<OwnerHasStation, AppError> {
        self.create(OwnerHasStationParam {
            owner_id,
            station_id,
            ownership_percentage,
        })
        .await
    }
}
