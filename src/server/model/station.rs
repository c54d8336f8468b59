//! Station domain models and parameters.
//!
//! A station is a solar installation at a single location. Batteries, solar panels,
//! energy sales and ownership shares all reference a station.

use chrono::NaiveDate;
use sea_orm::ActiveValue::Set;

use crate::{
    model::station::{PatchStationDto, StationDto, StationInputDto},
    server::data::crud::{set_if_some, Resource},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Station {
    pub id: i32,
    /// Installed capacity in kW.
    pub total_capacity: f64,
    pub installation_date: NaiveDate,
    pub location_id: i32,
}

impl Station {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::station::Model) -> Self {
        Self {
            id: entity.id,
            total_capacity: entity.total_capacity,
            installation_date: entity.installation_date,
            location_id: entity.location_id,
        }
    }

    /// Converts domain model to DTO for API responses.
    pub fn into_dto(self) -> StationDto {
        StationDto {
            id: self.id,
            total_capacity: self.total_capacity,
            installation_date: self.installation_date,
            location_id: self.location_id,
        }
    }
}

/// Parameters for creating or replacing a station.
#[derive(Debug, Clone)]
pub struct StationParam {
    pub total_capacity: f64,
    pub installation_date: NaiveDate,
    /// Must reference an existing location.
    pub location_id: i32,
}

impl From<StationInputDto> for StationParam {
    fn from(dto: StationInputDto) -> Self {
        Self {
            total_capacity: dto.total_capacity,
            installation_date: dto.installation_date,
            location_id: dto.location_id,
        }
    }
}

/// Parameters for a partial station update. `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct PatchStationParam {
    pub total_capacity: Option<f64>,
    pub installation_date: Option<NaiveDate>,
    pub location_id: Option<i32>,
}

impl From<PatchStationDto> for PatchStationParam {
    fn from(dto: PatchStationDto) -> Self {
        Self {
            total_capacity: dto.total_capacity,
            installation_date: dto.installation_date,
            location_id: dto.location_id,
        }
    }
}

pub struct StationResource;

impl Resource for StationResource {
    const NAME: &'static str = "Station";

    type Entity = entity::station::Entity;
    type Model = entity::station::Model;
    type PrimaryKey = entity::station::PrimaryKey;
    type ActiveModel = entity::station::ActiveModel;

    type Domain = Station;
    type Fields = StationParam;
    type Patch = PatchStationParam;

    fn from_entity(model: Self::Model) -> Self::Domain {
        Station::from_entity(model)
    }

    fn apply_fields(active: &mut Self::ActiveModel, fields: Self::Fields) {
        active.total_capacity = Set(fields.total_capacity);
        active.installation_date = Set(fields.installation_date);
        active.location_id = Set(fields.location_id);
    }

    fn apply_patch(active: &mut Self::ActiveModel, patch: Self::Patch) {
        set_if_some(&mut active.total_capacity, patch.total_capacity);
        set_if_some(&mut active.installation_date, patch.installation_date);
        set_if_some(&mut active.location_id, patch.location_id);
    }
}
