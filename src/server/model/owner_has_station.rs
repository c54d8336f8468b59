//! Ownership share domain models and parameters.
//!
//! Links an owner to a station together with the percentage of the station they own.
//! Several owners may hold shares of the same station and one owner may hold shares of
//! several stations.

use sea_orm::ActiveValue::Set;

use crate::{
    model::owner_has_station::{
        OwnerHasStationDto, OwnerHasStationInputDto, PatchOwnerHasStationDto,
    },
    server::data::crud::{set_if_some, Resource},
};

#[derive(Debug, Clone, PartialEq)]
pub struct OwnerHasStation {
    pub id: i32,
    pub owner_id: i32,
    pub station_id: i32,
    pub ownership_percentage: f64,
}

impl OwnerHasStation {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The owner_has_station entity from the database
    ///
    /// # Returns
    /// - `OwnerHasStation` - The converted domain model
    pub fn from_entity(entity: entity::owner_has_station::Model) -> Self {
        Self {
            id: entity.id,
            owner_id: entity.owner_id,
            station_id: entity.station_id,
            ownership_percentage: entity.ownership_percentage,
        }
    }

    /// Converts domain model to DTO for API responses.
    ///
    /// # Returns
    /// - `OwnerHasStationDto` - DTO with all ownership fields for serialization
    pub fn into_dto(self) -> OwnerHasStationDto {
        OwnerHasStationDto {
            id: self.id,
            owner_id: self.owner_id,
            station_id: self.station_id,
            ownership_percentage: self.ownership_percentage,
        }
    }
}

/// Parameters for creating or replacing an ownership share.
///
/// Both `owner_id` and `station_id` must reference existing rows; the store rejects the
/// write otherwise.
#[derive(Debug, Clone)]
pub struct OwnerHasStationParam {
    pub owner_id: i32,
    pub station_id: i32,
    pub ownership_percentage: f64,
}

impl From<OwnerHasStationInputDto> for OwnerHasStationParam {
    fn from(dto: OwnerHasStationInputDto) -> Self {
        Self {
            owner_id: dto.owner_id,
            station_id: dto.station_id,
            ownership_percentage: dto.ownership_percentage,
        }
    }
}

/// Parameters for a partial ownership share update.
#[derive(Debug, Clone, Default)]
pub struct PatchOwnerHasStationParam {
    pub owner_id: Option<i32>,
    pub station_id: Option<i32>,
    pub ownership_percentage: Option<f64>,
}

impl From<PatchOwnerHasStationDto> for PatchOwnerHasStationParam {
    fn from(dto: PatchOwnerHasStationDto) -> Self {
        Self {
            owner_id: dto.owner_id,
            station_id: dto.station_id,
            ownership_percentage: dto.ownership_percentage,
        }
    }
}

pub struct OwnerHasStationResource;

impl Resource for OwnerHasStationResource {
    const NAME: &'static str = "OwnerHasStation";

    type Entity = entity::owner_has_station::Entity;
    type Model = entity::owner_has_station::Model;
    type PrimaryKey = entity::owner_has_station::PrimaryKey;
    type ActiveModel = entity::owner_has_station::ActiveModel;

    type Domain = OwnerHasStation;
    type Fields = OwnerHasStationParam;
    type Patch = PatchOwnerHasStationParam;

    fn from_entity(model: Self::Model) -> Self::Domain {
        OwnerHasStation::from_entity(model)
    }

    fn apply_fields(active: &mut Self::ActiveModel, fields: Self::Fields) {
        active.owner_id = Set(fields.owner_id);
        active.station_id = Set(fields.station_id);
        active.ownership_percentage = Set(fields.ownership_percentage);
    }

    fn apply_patch(active: &mut Self::ActiveModel, patch: Self::Patch) {
        set_if_some(&mut active.owner_id, patch.owner_id);
        set_if_some(&mut active.station_id, patch.station_id);
        set_if_some(&mut active.ownership_percentage, patch.ownership_percentage);
    }
}
