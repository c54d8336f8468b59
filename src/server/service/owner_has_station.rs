use crate::server::{
    data::owner_has_station::OwnerHasStationRepository,
    error::AppError,
    model::owner_has_station::{OwnerHasStation, OwnerHasStationParam, OwnerHasStationResource},
    service::crud::CrudService,
};

pub type OwnerHasStationService<'a> = CrudService<'a, OwnerHasStationResource>;

impl<'a> OwnerHasStationService<'a> {
    /// Gets the ownership shares of a station.
    pub async fn find_owners_by_station(
        &self,
        station_id: i32,
    ) -> Result<Vec<OwnerHasStation>, AppError> {
        OwnerHasStationRepository::new(self.db)
            .find_by_station(station_id)
            .await
    }

    /// Gets the ownership shares held by an owner.
    pub async fn find_stations_by_owner(
        &self,
        owner_id: i32,
    ) -> Result<Vec<OwnerHasStation>, AppError> {
        OwnerHasStationRepository::new(self.db)
            .find_by_owner(owner_id)
            .await
    }

    /// Records an ownership share through the dedicated insert.
    pub async fn insert_owner_has_station(
        &self,
        param: OwnerHasStationParam,
    ) -> Result<OwnerHasStation, AppError> {
        OwnerHasStationRepository::new(self.db)
            .insert_owner_has_station(
                param.owner_id,
                param.station_id,
                param.ownership_percentage,
            )
            .await
    }
}
