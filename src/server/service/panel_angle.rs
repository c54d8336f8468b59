use crate::server::{
    data::panel_angle::PanelAngleRepository,
    error::AppError,
    model::panel_angle::{PanelAngle, PanelAngleResource},
    service::crud::CrudService,
};

pub type PanelAngleService<'a> = CrudService<'a, PanelAngleResource>;

impl<'a> PanelAngleService<'a> {
    pub async fn find_by_solar_panel(
        &self,
        solar_panel_id: i32,
    ) -> Result<Vec<PanelAngle>, AppError> {
        PanelAngleRepository::new(self.db)
            .find_by_solar_panel(solar_panel_id)
            .await
    }
}
