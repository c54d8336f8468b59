use crate::server::{
    data::location::LocationRepository,
    error::AppError,
    model::location::{Location, LocationParam, LocationResource},
    service::crud::CrudService,
};

pub type LocationService<'a> = CrudService<'a, LocationResource>;

impl<'a> LocationService<'a> {
    /// Creates a location through the dedicated insert.
    pub async fn insert_location(&self, param: LocationParam) -> Result<Location, AppError> {
        LocationRepository::new(self.db)
            .insert_location(param.city, param.street)
            .await
    }
}
