use crate::server::{
    controller::crud::CrudController,
    error::AppError,
    model::battery::{Battery, BatteryResource},
    service::battery::BatteryService,
};

pub type BatteryController<'a> = CrudController<'a, BatteryResource>;

impl<'a> BatteryController<'a> {
    pub async fn find_by_station(&self, station_id: i32) -> Result<Vec<Battery>, AppError> {
        BatteryService::new(self.db)
            .find_by_station(station_id)
            .await
    }
}
