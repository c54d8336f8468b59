use crate::server::{
    controller::crud::CrudController,
    error::AppError,
    model::solar_panel::{SolarPanel, SolarPanelResource},
    service::solar_panel::SolarPanelService,
};

pub type SolarPanelController<'a> = CrudController<'a, SolarPanelResource>;

impl<'a> SolarPanelController<'a> {
    pub async fn find_by_panel_type(&self, panel_type_id: i32) -> Result<Vec<SolarPanel>, AppError> {
        SolarPanelService::new(self.db)
            .find_by_panel_type(panel_type_id)
            .await
    }

    pub async fn find_by_station(&self, station_id: i32) -> Result<Vec<SolarPanel>, AppError> {
        SolarPanelService::new(self.db)
            .find_by_station(station_id)
            .await
    }
}
