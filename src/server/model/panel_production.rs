//! Panel production domain models and parameters.

use chrono::NaiveDateTime;
use sea_orm::ActiveValue::Set;

use crate::{
    model::panel_production::{
        PanelProductionDto, PanelProductionInputDto, PatchPanelProductionDto,
    },
    server::data::crud::{set_if_some, Resource},
};

/// Energy produced by a solar panel, in kWh, recorded at a point in time.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelProduction {
    pub id: i32,
    pub date_time: NaiveDateTime,
    pub production: f64,
    pub solar_panel_id: i32,
}

impl PanelProduction {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::panel_production::Model) -> Self {
        Self {
            id: entity.id,
            date_time: entity.date_time,
            production: entity.production,
            solar_panel_id: entity.solar_panel_id,
        }
    }

    /// Converts domain model to DTO for API responses.
    pub fn into_dto(self) -> PanelProductionDto {
        PanelProductionDto {
            id: self.id,
            date_time: self.date_time,
            production: self.production,
            solar_panel_id: self.solar_panel_id,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PanelProductionParam {
    pub date_time: NaiveDateTime,
    pub production: f64,
    pub solar_panel_id: i32,
}

impl From<PanelProductionInputDto> for PanelProductionParam {
    fn from(dto: PanelProductionInputDto) -> Self {
        Self {
            date_time: dto.date_time,
            production: dto.production,
            solar_panel_id: dto.solar_panel_id,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct PatchPanelProductionParam {
    pub date_time: Option<NaiveDateTime>,
    pub production: Option<f64>,
    pub solar_panel_id: Option<i32>,
}

impl From<PatchPanelProductionDto> for PatchPanelProductionParam {
    fn from(dto: PatchPanelProductionDto) -> Self {
        Self {
            date_time: dto.date_time,
            production: dto.production,
            solar_panel_id: dto.solar_panel_id,
        }
    }
}

pub struct PanelProductionResource;

impl Resource for PanelProductionResource {
    const NAME: &'static str = "PanelProduction";

    type Entity = entity::panel_production::Entity;
    type Model = entity::panel_production::Model;
    type PrimaryKey = entity::panel_production::PrimaryKey;
    type ActiveModel = entity::panel_production::ActiveModel;

    type Domain = PanelProduction;
    type Fields = PanelProductionParam;
    type Patch = PatchPanelProductionParam;

    fn from_entity(model: Self::Model) -> Self::Domain {
        PanelProduction::from_entity(model)
    }

    fn apply_fields(active: &mut Self::ActiveModel, fields: Self::Fields) {
        active.date_time = Set(fields.date_time);
        active.production = Set(fields.production);
        active.solar_panel_id = Set(fields.solar_panel_id);
    }

    fn apply_patch(active: &mut Self::ActiveModel, patch: Self::Patch) {
        set_if_some(&mut active.date_time, patch.date_time);
        set_if_some(&mut active.production, patch.production);
        set_if_some(&mut active.solar_panel_id, patch.solar_panel_id);
    }
}
