//! Battery domain models and parameters.

use chrono::NaiveDate;
use sea_orm::ActiveValue::Set;

use crate::{
    model::battery::{BatteryDto, BatteryInputDto, PatchBatteryDto},
    server::data::crud::{set_if_some, Resource},
};

/// Storage battery installed at a station.
#[derive(Debug, Clone, PartialEq)]
pub struct Battery {
    pub id: i32,
    /// Capacity label as entered by the operator, e.g. `"10kWh"`.
    pub capacity: String,
    pub installation_date: NaiveDate,
    pub station_id: i32,
}

impl Battery {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The battery entity from the database
    ///
    /// # Returns
    /// - `Battery` - The converted domain model
    pub fn from_entity(entity: entity::battery::Model) -> Self {
        Self {
            id: entity.id,
            capacity: entity.capacity,
            installation_date: entity.installation_date,
            station_id: entity.station_id,
        }
    }

    /// Converts domain model to DTO for API responses.
    ///
    /// # Returns
    /// - `BatteryDto` - DTO with all battery fields for serialization
    pub fn into_dto(self) -> BatteryDto {
        BatteryDto {
            id: self.id,
            capacity: self.capacity,
            installation_date: self.installation_date,
            station_id: self.station_id,
        }
    }
}

/// Parameters for creating or replacing a battery.
#[derive(Debug, Clone)]
pub struct BatteryParam {
    pub capacity: String,
    pub installation_date: NaiveDate,
    pub station_id: i32,
}

impl From<BatteryInputDto> for BatteryParam {
    fn from(dto: BatteryInputDto) -> Self {
        Self {
            capacity: dto.capacity,
            installation_date: dto.installation_date,
            station_id: dto.station_id,
        }
    }
}

/// Parameters for a partial battery update.
#[derive(Debug, Clone, Default)]
pub struct PatchBatteryParam {
    pub capacity: Option<String>,
    pub installation_date: Option<NaiveDate>,
    pub station_id: Option<i32>,
}

impl From<PatchBatteryDto> for PatchBatteryParam {
    fn from(dto: PatchBatteryDto) -> Self {
        Self {
            capacity: dto.capacity,
            installation_date: dto.installation_date,
            station_id: dto.station_id,
        }
    }
}

pub struct BatteryResource;

impl Resource for BatteryResource {
    const NAME: &'static str = "Battery";

    type Entity = entity::battery::Entity;
    type Model = entity::battery::Model;
    type PrimaryKey = entity::battery::PrimaryKey;
    type ActiveModel = entity::battery::ActiveModel;

    type Domain = Battery;
    type Fields = BatteryParam;
    type Patch = PatchBatteryParam;

    fn from_entity(model: Self::Model) -> Self::Domain {
        Battery::from_entity(model)
    }

    fn apply_fields(active: &mut Self::ActiveModel, fields: Self::Fields) {
        active.capacity = Set(fields.capacity);
        active.installation_date = Set(fields.installation_date);
        active.station_id = Set(fields.station_id);
    }

    fn apply_patch(active: &mut Self::ActiveModel, patch: Self::Patch) {
        set_if_some(&mut active.capacity, patch.capacity);
        set_if_some(&mut active.installation_date, patch.installation_date);
        set_if_some(&mut active.station_id, patch.station_id);
    }
}
