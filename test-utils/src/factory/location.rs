//! Location factory for creating test location entities.

use crate::factory::helpers::next_id;
use crate::fixture;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test locations with customizable fields.
///
/// Defaults come from `fixture::location`, with a unique street per location.
pub struct LocationFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::location::Model,
}

impl<'a> LocationFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        let entity = fixture::location::entity_builder()
            .street(format!("{} Solar Street", id))
            .build();

        Self { db, entity }
    }

    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.entity.city = city.into();
        self
    }

    pub fn street(mut self, street: impl Into<String>) -> Self {
        self.entity.street = street.into();
        self
    }

    /// Builds and inserts the location entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::location::Model)` - Created location entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::location::Model, DbErr> {
        entity::location::ActiveModel {
            id: ActiveValue::NotSet,
            city: ActiveValue::Set(self.entity.city),
            street: ActiveValue::Set(self.entity.street),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a location with default values.
pub async fn create_location(db: &DatabaseConnection) -> Result<entity::location::Model, DbErr> {
    LocationFactory::new(db).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use entity::prelude::*;

    #[tokio::test]
    async fn creates_locations_with_unique_streets() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_table(Location)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let first = create_location(db).await?;
        let second = LocationFactory::new(db).city("Shelbyville").build().await?;

        assert_ne!(first.id, second.id);
        assert_ne!(first.street, second.street);
        assert_eq!(first.city, fixture::location::DEFAULT_CITY);
        assert_eq!(second.city, "Shelbyville");

        Ok(())
    }
}
