//! Panel type domain models and parameters.

use sea_orm::ActiveValue::Set;

use crate::{
    model::panel_type::{PanelTypeDto, PanelTypeInputDto, PatchPanelTypeDto},
    server::data::crud::{set_if_some, Resource},
};

/// Catalogue entry describing a kind of solar panel (monocrystalline, thin film, ...).
#[derive(Debug, Clone, PartialEq)]
pub struct PanelType {
    pub id: i32,
    pub type_name: String,
    pub description: String,
}

impl PanelType {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::panel_type::Model) -> Self {
        Self {
            id: entity.id,
            type_name: entity.type_name,
            description: entity.description,
        }
    }

    /// Converts domain model to DTO for API responses.
    pub fn into_dto(self) -> PanelTypeDto {
        PanelTypeDto {
            id: self.id,
            type_name: self.type_name,
            description: self.description,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PanelTypeParam {
    pub type_name: String,
    pub description: String,
}

impl From<PanelTypeInputDto> for PanelTypeParam {
    fn from(dto: PanelTypeInputDto) -> Self {
        Self {
            type_name: dto.type_name,
            description: dto.description,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct PatchPanelTypeParam {
    pub type_name: Option<String>,
    pub description: Option<String>,
}

impl From<PatchPanelTypeDto> for PatchPanelTypeParam {
    fn from(dto: PatchPanelTypeDto) -> Self {
        Self {
            type_name: dto.type_name,
            description: dto.description,
        }
    }
}

pub struct PanelTypeResource;

impl Resource for PanelTypeResource {
    const NAME: &'static str = "PanelType";

    type Entity = entity::panel_type::Entity;
    type Model = entity::panel_type::Model;
    type PrimaryKey = entity::panel_type::PrimaryKey;
    type ActiveModel = entity::panel_type::ActiveModel;

    type Domain = PanelType;
    type Fields = PanelTypeParam;
    type Patch = PatchPanelTypeParam;

    fn from_entity(model: Self::Model) -> Self::Domain {
        PanelType::from_entity(model)
    }

    fn apply_fields(active: &mut Self::ActiveModel, fields: Self::Fields) {
        active.type_name = Set(fields.type_name);
        active.description = Set(fields.description);
    }

    fn apply_patch(active: &mut Self::ActiveModel, patch: Self::Patch) {
        set_if_some(&mut active.type_name, patch.type_name);
        set_if_some(&mut active.description, patch.description);
    }
}
