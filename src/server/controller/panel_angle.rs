use crate::server::{
    controller::crud::CrudController,
    error::AppError,
    model::panel_angle::{PanelAngle, PanelAngleResource},
    service::panel_angle::PanelAngleService,
};

pub type PanelAngleController<'a> = CrudController<'a, PanelAngleResource>;

impl<'a> PanelAngleController<'a> {
    pub async fn find_by_solar_panel(
        &self,
        solar_panel_id: i32,
    ) -> Result<Vec<PanelAngle>, AppError> {
        PanelAngleService::new(self.db)
            .find_by_solar_panel(solar_panel_id)
            .await
    }
}
