use crate::server::{
    data::{
        battery::BatteryRepository, crud::CrudRepository, energy_sale::EnergySaleRepository,
        station::StationRepository,
    },
    error::AppError,
    model::{
        owner::OwnerResource,
        panel_type::PanelTypeResource,
        station::{PatchStationParam, StationParam},
    },
};
use chrono::NaiveDate;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find_all;
mod find_by_id;
mod patch;
mod update;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}
