use crate::server::{
    controller::crud::CrudController,
    error::AppError,
    model::location::{Location, LocationParam, LocationResource},
    service::location::LocationService,
};

pub type LocationController<'a> = CrudController<'a, LocationResource>;

impl<'a> LocationController<'a> {
    pub async fn insert_location(&self, param: LocationParam) -> Result<Location, AppError> {
        LocationService::new(self.db).insert_location(param).await
    }
}
