use crate::server::{
    controller::crud::CrudController,
    error::AppError,
    model::battery_level::{BatteryLevel, BatteryLevelResource},
    service::battery_level::BatteryLevelService,
};

pub type BatteryLevelController<'a> = CrudController<'a, BatteryLevelResource>;

impl<'a> BatteryLevelController<'a> {
    pub async fn find_by_battery(&self, battery_id: i32) -> Result<Vec<BatteryLevel>, AppError> {
        BatteryLevelService::new(self.db)
            .find_by_battery(battery_id)
            .await
    }
}
