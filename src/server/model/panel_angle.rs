//! Panel angle domain models and parameters.

use chrono::NaiveDateTime;
use sea_orm::ActiveValue::Set;

use crate::{
    model::panel_angle::{PanelAngleDto, PanelAngleInputDto, PatchPanelAngleDto},
    server::data::crud::{set_if_some, Resource},
};

/// Tilt of a solar panel in degrees at a point in time.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelAngle {
    pub id: i32,
    pub date_time: NaiveDateTime,
    pub angle: f64,
    pub solar_panel_id: i32,
}

impl PanelAngle {
    pub fn from_entity(entity: entity::panel_angle::Model) -> Self {
        Self {
            id: entity.id,
            date_time: entity.date_time,
            angle: entity.angle,
            solar_panel_id: entity.solar_panel_id,
        }
    }

    pub fn into_dto(self) -> PanelAngleDto {
        PanelAngleDto {
            id: self.id,
            date_time: self.date_time,
            angle: self.angle,
            solar_panel_id: self.solar_panel_id,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PanelAngleParam {
    pub date_time: NaiveDateTime,
    pub angle: f64,
    pub solar_panel_id: i32,
}

impl From<PanelAngleInputDto> for PanelAngleParam {
    fn from(dto: PanelAngleInputDto) -> Self {
        Self {
            date_time: dto.date_time,
            angle: dto.angle,
            solar_panel_id: dto.solar_panel_id,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct PatchPanelAngleParam {
    pub date_time: Option<NaiveDateTime>,
    pub angle: Option<f64>,
    pub solar_panel_id: Option<i32>,
}

impl From<PatchPanelAngleDto> for PatchPanelAngleParam {
    fn from(dto: PatchPanelAngleDto) -> Self {
        Self {
            date_time: dto.date_time,
            angle: dto.angle,
            solar_panel_id: dto.solar_panel_id,
        }
    }
}

pub struct PanelAngleResource;

impl Resource for PanelAngleResource {
    const NAME: &'static str = "PanelAngle";

    type Entity = entity::panel_angle::Entity;
    type Model = entity::panel_angle::Model;
    type PrimaryKey = entity::panel_angle::PrimaryKey;
    type ActiveModel = entity::panel_angle::ActiveModel;

    type Domain = PanelAngle;
    type Fields = PanelAngleParam;
    type Patch = PatchPanelAngleParam;

    fn from_entity(model: Self::Model) -> Self::Domain {
        PanelAngle::from_entity(model)
    }

    fn apply_fields(active: &mut Self::ActiveModel, fields: Self::Fields) {
        active.date_time = Set(fields.date_time);
        active.angle = Set(fields.angle);
        active.solar_panel_id = Set(fields.solar_panel_id);
    }

    fn apply_patch(active: &mut Self::ActiveModel, patch: Self::Patch) {
        set_if_some(&mut active.date_time, patch.date_time);
        set_if_some(&mut active.angle, patch.angle);
        set_if_some(&mut active.solar_panel_id, patch.solar_panel_id);
    }
}
