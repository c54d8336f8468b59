use super::*;
use crate::model::{
    location::LocationDto, owner::OwnerDto, owner_has_station::OwnerHasStationDto,
    station::StationDto,
};

mod create;
mod delete;
mod find;
mod update;
