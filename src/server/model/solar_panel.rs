//! Solar panel domain models and parameters.

use chrono::NaiveDate;
use sea_orm::ActiveValue::Set;

use crate::{
    model::solar_panel::{PatchSolarPanelDto, SolarPanelDto, SolarPanelInputDto},
    server::data::crud::{set_if_some, Resource},
};

/// Panel of a given type mounted at a station.
#[derive(Debug, Clone, PartialEq)]
pub struct SolarPanel {
    pub id: i32,
    pub installation_date: NaiveDate,
    pub panel_type_id: i32,
    pub station_id: i32,
}

impl SolarPanel {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The solar panel entity from the database
    ///
    /// # Returns
    /// - `SolarPanel` - The converted domain model
    pub fn from_entity(entity: entity::solar_panel::Model) -> Self {
        Self {
            id: entity.id,
            installation_date: entity.installation_date,
            panel_type_id: entity.panel_type_id,
            station_id: entity.station_id,
        }
    }

    /// Converts domain model to DTO for API responses.
    ///
    /// # Returns
    /// - `SolarPanelDto` - DTO with all solar panel fields for serialization
    pub fn into_dto(self) -> SolarPanelDto {
        SolarPanelDto {
            id: self.id,
            installation_date: self.installation_date,
            panel_type_id: self.panel_type_id,
            station_id: self.station_id,
        }
    }
}

/// Parameters for creating or replacing a solar panel.
#[derive(Debug, Clone)]
pub struct SolarPanelParam {
    pub installation_date: NaiveDate,
    pub panel_type_id: i32,
    pub station_id: i32,
}

impl From<SolarPanelInputDto> for SolarPanelParam {
    fn from(dto: SolarPanelInputDto) -> Self {
        Self {
            installation_date: dto.installation_date,
            panel_type_id: dto.panel_type_id,
            station_id: dto.station_id,
        }
    }
}

/// Parameters for a partial solar panel update.
#[derive(Debug, Clone, Default)]
pub struct PatchSolarPanelParam {
    pub installation_date: Option<NaiveDate>,
    pub panel_type_id: Option<i32>,
    pub station_id: Option<i32>,
}

impl From<PatchSolarPanelDto> for PatchSolarPanelParam {
    fn from(dto: PatchSolarPanelDto) -> Self {
        Self {
            installation_date: dto.installation_date,
            panel_type_id: dto.panel_type_id,
            station_id: dto.station_id,
        }
    }
}

pub struct SolarPanelResource;

impl Resource for SolarPanelResource {
    const NAME: &'static str = "SolarPanel";

    type Entity = entity::solar_panel::Entity;
    type Model = entity::solar_panel::Model;
    type PrimaryKey = entity::solar_panel::PrimaryKey;
    type ActiveModel = entity::solar_panel::ActiveModel;

    type Domain = SolarPanel;
    type Fields = SolarPanelParam;
    type Patch = PatchSolarPanelParam;

    fn from_entity(model: Self::Model) -> Self::Domain {
        SolarPanel::from_entity(model)
    }

    fn apply_fields(active: &mut Self::ActiveModel, fields: Self::Fields) {
        active.installation_date = Set(fields.installation_date);
        active.panel_type_id = Set(fields.panel_type_id);
        active.station_id = Set(fields.station_id);
    }

    fn apply_patch(active: &mut Self::ActiveModel, patch: Self::Patch) {
        set_if_some(&mut active.installation_date, patch.installation_date);
        set_if_some(&mut active.panel_type_id, patch.panel_type_id);
        set_if_some(&mut active.station_id, patch.station_id);
    }
}
