use crate::server::{
    data::station::StationRepository,
    error::AppError,
    model::station::{Station, StationResource},
    service::crud::CrudService,
};

pub type StationService<'a> = CrudService<'a, StationResource>;

impl<'a> StationService<'a> {
    /// Gets all stations installed at a location.
    pub async fn find_by_location(&self, location_id: i32) -> Result<Vec<Station>, AppError> {
        StationRepository::new(self.db)
            .find_by_location(location_id)
            .await
    }
}
