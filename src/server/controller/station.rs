use crate::server::{
    controller::crud::CrudController,
    error::AppError,
    model::station::{Station, StationResource},
    service::station::StationService,
};

pub type StationController<'a> = CrudController<'a, StationResource>;

impl<'a> StationController<'a> {
    pub async fn find_by_location(&self, location_id: i32) -> Result<Vec<Station>, AppError> {
        StationService::new(self.db)
            .find_by_location(location_id)
            .await
    }
}
