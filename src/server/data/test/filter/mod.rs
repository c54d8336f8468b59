use crate::server::{
    data::{
        battery::BatteryRepository, battery_level::BatteryLevelRepository,
        panel_angle::PanelAngleRepository, panel_production::PanelProductionRepository,
        solar_panel::SolarPanelRepository, station::StationRepository,
    },
    error::AppError,
    model::{
        battery_level::BatteryLevelParam, panel_angle::PanelAngleParam,
        panel_production::PanelProductionParam,
    },
};
use chrono::{NaiveDate, NaiveDateTime};
use test_utils::{builder::TestBuilder, factory};

mod battery;
mod solar_panel;
mod station;

fn timestamp(day: u32, hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2023, 1, day)
        .unwrap()
        .and_hms_opt(hour, 0, 0)
        .unwrap()
}
