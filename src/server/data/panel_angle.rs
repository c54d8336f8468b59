use crate::server::{
    data::crud::CrudRepository,
    error::AppError,
    model::panel_angle::{PanelAngle, PanelAngleResource},
};

pub type PanelAngleRepository<'a> = CrudRepository<'a, PanelAngleResource>;

impl<'a> PanelAngleRepository<'a> {
    pub async fn find_by_solar_panel(
        &self,
        solar_panel_id: i32,
    ) -> Result<Vec<PanelAngle>, AppError> {
        self.find_by_column(entity::panel_angle::Column::SolarPanelId, solar_panel_id)
            .await
    }
}
