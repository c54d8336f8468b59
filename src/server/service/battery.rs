use crate::server::{
    data::battery::BatteryRepository,
    error::AppError,
    model::battery::{Battery, BatteryResource},
    service::crud::CrudService,
};

pub type BatteryService<'a> = CrudService<'a, BatteryResource>;

impl<'a> BatteryService<'a> {
    /// Gets all batteries installed at a station.
    pub async fn find_by_station(&self, station_id: i32) -> Result<Vec<Battery>, AppError> {
        BatteryRepository::new(self.db)
            .find_by_station(station_id)
            .await
    }
}
