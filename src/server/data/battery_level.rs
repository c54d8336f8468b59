use crate::server::{
    data::crud::CrudRepository,
    error::AppError,
    model::battery_level::{BatteryLevel, BatteryLevelResource},
};

pub type BatteryLevelRepository<'a> = CrudRepository<'a, BatteryLevelResource>;

impl<'a> BatteryLevelRepository<'a> {
    /// Gets all charge readings of a battery, ordered by id.
    pub async fn find_by_battery(&self, battery_id: i32) -> Result<Vec<BatteryLevel>, AppError> {
        self.find_by_column(entity::battery_level::Column::BatteryId, battery_id)
            .await
    }
}
