//! Owner domain models and parameters.

use sea_orm::ActiveValue::Set;

use crate::{
    model::owner::{OwnerDto, OwnerInputDto, PatchOwnerDto},
    server::data::crud::{set_if_some, Resource},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Owner {
    pub id: i32,
    pub name: String,
    pub surname: String,
    pub contact_number: i64,
}

impl Owner {
    pub fn from_entity(entity: entity::owner::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            surname: entity.surname,
            contact_number: entity.contact_number,
        }
    }

    pub fn into_dto(self) -> OwnerDto {
        OwnerDto {
            id: self.id,
            name: self.name,
            surname: self.surname,
            contact_number: self.contact_number,
        }
    }
}

#[derive(Debug, Clone)]
pub struct OwnerParam {
    pub name: String,
    pub surname: String,
    pub contact_number: i64,
}

impl From<OwnerInputDto> for OwnerParam {
    fn from(dto: OwnerInputDto) -> Self {
        Self {
            name: dto.name,
            surname: dto.surname,
            contact_number: dto.contact_number,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct PatchOwnerParam {
    pub name: Option<String>,
    pub surname: Option<String>,
    pub contact_number: Option<i64>,
}

impl From<PatchOwnerDto> for PatchOwnerParam {
    fn from(dto: PatchOwnerDto) -> Self {
        Self {
            name: dto.name,
            surname: dto.surname,
            contact_number: dto.contact_number,
        }
    }
}

pub struct OwnerResource;

impl Resource for OwnerResource {
    const NAME: &'static str = "Owner";

    type Entity = entity::owner::Entity;
    type Model = entity::owner::Model;
    type PrimaryKey = entity::owner::PrimaryKey;
    type ActiveModel = entity::owner::ActiveModel;

    type Domain = Owner;
    type Fields = OwnerParam;
    type Patch = PatchOwnerParam;

    fn from_entity(model: Self::Model) -> Self::Domain {
        Owner::from_entity(model)
    }

    fn apply_fields(active: &mut Self::ActiveModel, fields: Self::Fields) {
        active.name = Set(fields.name);
        active.surname = Set(fields.surname);
        active.contact_number = Set(fields.contact_number);
    }

    fn apply_patch(active: &mut Self::ActiveModel, patch: Self::Patch) {
        set_if_some(&mut active.name, patch.name);
        set_if_some(&mut active.surname, patch.surname);
        set_if_some(&mut active.contact_number, patch.contact_number);
    }
}
