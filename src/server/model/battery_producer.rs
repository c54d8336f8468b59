//! Battery producer domain models and parameters.

use sea_orm::ActiveValue::Set;

use crate::{
    model::battery_producer::{
        BatteryProducerDto, BatteryProducerInputDto, PatchBatteryProducerDto,
    },
    server::data::crud::{set_if_some, Resource},
};

/// Manufacturer of batteries. Not referenced by any other table.
#[derive(Debug, Clone, PartialEq)]
pub struct BatteryProducer {
    pub id: i32,
    pub name: String,
    pub country: String,
}

impl BatteryProducer {
    pub fn from_entity(entity: entity::battery_producer::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            country: entity.country,
        }
    }

    pub fn into_dto(self) -> BatteryProducerDto {
        BatteryProducerDto {
            id: self.id,
            name: self.name,
            country: self.country,
        }
    }
}

#[derive(Debug, Clone)]
pub struct BatteryProducerParam {
    pub name: String,
    pub country: String,
}

impl From<BatteryProducerInputDto> for BatteryProducerParam {
    fn from(dto: BatteryProducerInputDto) -> Self {
        Self {
            name: dto.name,
            country: dto.country,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct PatchBatteryProducerParam {
    pub name: Option<String>,
    pub country: Option<String>,
}

impl From<PatchBatteryProducerDto> for PatchBatteryProducerParam {
    fn from(dto: PatchBatteryProducerDto) -> Self {
        Self {
            name: dto.name,
            country: dto.country,
        }
    }
}

pub struct BatteryProducerResource;

impl Resource for BatteryProducerResource {
    const NAME: &'static str = "BatteryProducer";

    type Entity = entity::battery_producer::Entity;
    type Model = entity::battery_producer::Model;
    type PrimaryKey = entity::battery_producer::PrimaryKey;
    type ActiveModel = entity::battery_producer::ActiveModel;

    type Domain = BatteryProducer;
    type Fields = BatteryProducerParam;
    type Patch = PatchBatteryProducerParam;

    fn from_entity(model: Self::Model) -> Self::Domain {
        BatteryProducer::from_entity(model)
    }

    fn apply_fields(active: &mut Self::ActiveModel, fields: Self::Fields) {
        active.name = Set(fields.name);
        active.country = Set(fields.country);
    }

    fn apply_patch(active: &mut Self::ActiveModel, patch: Self::Patch) {
        set_if_some(&mut active.name, patch.name);
        set_if_some(&mut active.country, patch.country);
    }
}
