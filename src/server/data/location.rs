use crate::server::{
    data::crud::CrudRepository,
    error::AppError,
    model::location::{Location, LocationParam, LocationResource},
};

pub type LocationRepository<'a> = CrudRepository<'a, LocationResource>;

impl<'a> LocationRepository<'a> {
    /// Inserts a location from its city and street.
    ///
    /// # Arguments
    /// - `city` - City name
    /// - `street` - Street address within the city
    ///
    /// # Returns
    /// - `Ok(Location)` - The created location including its assigned id
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn insert_location(&self, city: String, street: String) -> Result<Location, AppError> {
        let location = self.create(LocationParam { city, street }).await?;

        tracing::debug!("Inserted location {} ({})", location.id, location.city);

        Ok(location)
    }
}
