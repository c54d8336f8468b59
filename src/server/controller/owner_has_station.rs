use crate::server::{
    controller::crud::CrudController,
    error::AppError,
    model::owner_has_station::{OwnerHasStation, OwnerHasStationParam, OwnerHasStationResource},
    service::owner_has_station::OwnerHasStationService,
};

pub type OwnerHasStationController<'a> = CrudController<'a, OwnerHasStationResource>;

impl<'a> OwnerHasStationController<'a> {
    pub async fn find_owners_by_station(
        &self,
        station_id: i32,
    ) -> Result<Vec<OwnerHasStation>, AppError> {
        OwnerHasStationService::new(self.db)
            .find_owners_by_station(station_id)
            .await
    }

    pub async fn find_stations_by_owner(
        &self,
        owner_id: i32,
    ) -> Result<Vec<OwnerHasStation>, AppError> {
        OwnerHasStationService::new(self.db)
            .find_stations_by_owner(owner_id)
            .await
    }

    pub async fn insert_owner_has_station(
        &self,
        param: OwnerHasStationParam,
    ) -> Result<OwnerHasStation, AppError> {
        OwnerHasStationService::new(self.db)
            .insert_owner_has_station(param)
            .await
    }
}
