use crate::server::{
    data::panel_production::PanelProductionRepository,
    error::AppError,
    model::panel_production::{PanelProduction, PanelProductionResource},
    service::crud::CrudService,
};

pub type PanelProductionService<'a> = CrudService<'a, PanelProductionResource>;

impl<'a> PanelProductionService<'a> {
    pub async fn find_by_solar_panel(
        &self,
        solar_panel_id: i32,
    ) -> Result<Vec<PanelProduction>, AppError> {
        PanelProductionRepository::new(self.db)
            .find_by_solar_panel(solar_panel_id)
            .await
    }
}
