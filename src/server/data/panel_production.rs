use crate::server::{
    data::crud::CrudRepository,
    error::AppError,
    model::panel_production::{PanelProduction, PanelProductionResource},
};

pub type PanelProductionRepository<'a> = CrudRepository<'a, PanelProductionResource>;

impl<'a> PanelProductionRepository<'a> {
    /// Gets all production records of a solar panel, ordered by id.
    pub async fn find_by_solar_panel(
        &self,
        solar_panel_id: i32,
    ) -> Result<Vec<PanelProduction>, AppError> {
        self.find_by_column(
            entity::panel_production::Column::SolarPanelId,
            solar_panel_id,
        )
        .await
    }
}
