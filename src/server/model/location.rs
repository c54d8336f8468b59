//! Location domain models and parameters.

use sea_orm::ActiveValue::Set;

use crate::{
    model::location::{LocationDto, LocationInputDto, PatchLocationDto},
    server::data::crud::{set_if_some, Resource},
};

/// Street address a station is installed at.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub id: i32,
    pub city: String,
    pub street: String,
}

impl Location {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The location entity from the database
    ///
    /// # Returns
    /// - `Location` - The converted domain model
    pub fn from_entity(entity: entity::location::Model) -> Self {
        Self {
            id: entity.id,
            city: entity.city,
            street: entity.street,
        }
    }

    /// Converts domain model to DTO for API responses.
    ///
    /// # Returns
    /// - `LocationDto` - DTO with all location fields for serialization
    pub fn into_dto(self) -> LocationDto {
        LocationDto {
            id: self.id,
            city: self.city,
            street: self.street,
        }
    }
}

/// Parameters for creating or replacing a location.
#[derive(Debug, Clone)]
pub struct LocationParam {
    pub city: String,
    pub street: String,
}

impl From<LocationInputDto> for LocationParam {
    fn from(dto: LocationInputDto) -> Self {
        Self {
            city: dto.city,
            street: dto.street,
        }
    }
}

/// Parameters for a partial location update.
#[derive(Debug, Clone, Default)]
pub struct PatchLocationParam {
    pub city: Option<String>,
    pub street: Option<String>,
}

impl From<PatchLocationDto> for PatchLocationParam {
    fn from(dto: PatchLocationDto) -> Self {
        Self {
            city: dto.city,
            street: dto.street,
        }
    }
}

pub struct LocationResource;

impl Resource for LocationResource {
    const NAME: &'static str = "Location";

    type Entity = entity::location::Entity;
    type Model = entity::location::Model;
    type PrimaryKey = entity::location::PrimaryKey;
    type ActiveModel = entity::location::ActiveModel;

    type Domain = Location;
    type Fields = LocationParam;
    type Patch = PatchLocationParam;

    fn from_entity(model: Self::Model) -> Self::Domain {
        Location::from_entity(model)
    }

    fn apply_fields(active: &mut Self::ActiveModel, fields: Self::Fields) {
        active.city = Set(fields.city);
        active.street = Set(fields.street);
    }

    fn apply_patch(active: &mut Self::ActiveModel, patch: Self::Patch) {
        set_if_some(&mut active.city, patch.city);
        set_if_some(&mut active.street, patch.street);
    }
}
