use crate::server::{
    data::solar_panel::SolarPanelRepository,
    error::AppError,
    model::solar_panel::{SolarPanel, SolarPanelResource},
    service::crud::CrudService,
};

pub type SolarPanelService<'a> = CrudService<'a, SolarPanelResource>;

impl<'a> SolarPanelService<'a> {
    /// Gets all solar panels of a panel type.
    pub async fn find_by_panel_type(&self, panel_type_id: i32) -> Result<Vec<SolarPanel>, AppError> {
        SolarPanelRepository::new(self.db)
            .find_by_panel_type(panel_type_id)
            .await
    }

    /// Gets all solar panels mounted at a station.
    pub async fn find_by_station(&self, station_id: i32) -> Result<Vec<SolarPanel>, AppError> {
        SolarPanelRepository::new(self.db)
            .find_by_station(station_id)
            .await
    }
}
