//! Battery charge reading domain models and parameters.

use chrono::NaiveDateTime;
use sea_orm::ActiveValue::Set;

use crate::{
    model::battery_level::{BatteryLevelDto, BatteryLevelInputDto, PatchBatteryLevelDto},
    server::data::crud::{set_if_some, Resource},
};

#[derive(Debug, Clone, PartialEq)]
pub struct BatteryLevel {
    pub id: i32,
    pub date_time: NaiveDateTime,
    pub charge_level: f64,
    pub battery_id: i32,
}

impl BatteryLevel {
    pub fn from_entity(entity: entity::battery_level::Model) -> Self {
        Self {
            id: entity.id,
            date_time: entity.date_time,
            charge_level: entity.charge_level,
            battery_id: entity.battery_id,
        }
    }

    pub fn into_dto(self) -> BatteryLevelDto {
        BatteryLevelDto {
            id: self.id,
            date_time: self.date_time,
            charge_level: self.charge_level,
            battery_id: self.battery_id,
        }
    }
}

#[derive(Debug, Clone)]
pub struct BatteryLevelParam {
    pub date_time: NaiveDateTime,
    pub charge_level: f64,
    pub battery_id: i32,
}

impl From<BatteryLevelInputDto> for BatteryLevelParam {
    fn from(dto: BatteryLevelInputDto) -> Self {
        Self {
            date_time: dto.date_time,
            charge_level: dto.charge_level,
            battery_id: dto.battery_id,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct PatchBatteryLevelParam {
    pub date_time: Option<NaiveDateTime>,
    pub charge_level: Option<f64>,
    pub battery_id: Option<i32>,
}

impl From<PatchBatteryLevelDto> for PatchBatteryLevelParam {
    fn from(dto: PatchBatteryLevelDto) -> Self {
        Self {
            date_time: dto.date_time,
            charge_level: dto.charge_level,
            battery_id: dto.battery_id,
        }
    }
}

pub struct BatteryLevelResource;

impl Resource for BatteryLevelResource {
    const NAME: &'static str = "BatteryLevel";

    type Entity = entity::battery_level::Entity;
    type Model = entity::battery_level::Model;
    type PrimaryKey = entity::battery_level::PrimaryKey;
    type ActiveModel = entity::battery_level::ActiveModel;

    type Domain = BatteryLevel;
    type Fields = BatteryLevelParam;
    type Patch = PatchBatteryLevelParam;

    fn from_entity(model: Self::Model) -> Self::Domain {
        BatteryLevel::from_entity(model)
    }

    fn apply_fields(active: &mut Self::ActiveModel, fields: Self::Fields) {
        active.date_time = Set(fields.date_time);
        active.charge_level = Set(fields.charge_level);
        active.battery_id = Set(fields.battery_id);
    }

    fn apply_patch(active: &mut Self::ActiveModel, patch: Self::Patch) {
        set_if_some(&mut active.date_time, patch.date_time);
        set_if_some(&mut active.charge_level, patch.charge_level);
        set_if_some(&mut active.battery_id, patch.battery_id);
    }
}
