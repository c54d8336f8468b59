use crate::server::{
    data::battery_level::BatteryLevelRepository,
    error::AppError,
    model::battery_level::{BatteryLevel, BatteryLevelResource},
    service::crud::CrudService,
};

pub type BatteryLevelService<'a> = CrudService<'a, BatteryLevelResource>;

impl<'a> BatteryLevelService<'a> {
    pub async fn find_by_battery(&self, battery_id: i32) -> Result<Vec<BatteryLevel>, AppError> {
        BatteryLevelRepository::new(self.db)
            .find_by_battery(battery_id)
            .await
    }
}
