use crate::server::{
    controller::crud::CrudController,
    error::AppError,
    model::panel_production::{PanelProduction, PanelProductionResource},
    service::panel_production::PanelProductionService,
};

pub type PanelProductionController<'a> = CrudController<'a, PanelProductionResource>;

impl<'a> PanelProductionController<'a> {
    pub async fn find_by_solar_panel(
        &self,
        solar_panel_id: i32,
    ) -> Result<Vec<PanelProduction>, AppError> {
        PanelProductionService::new(self.db)
            .find_by_solar_panel(solar_panel_id)
            .await
    }
}
