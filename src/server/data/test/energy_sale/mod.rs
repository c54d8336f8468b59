use crate::server::{
    data::energy_sale::EnergySaleRepository, error::AppError, model::energy_sale::SalePeriod,
};
use chrono::{NaiveDate, NaiveDateTime};
use test_utils::{builder::TestBuilder, factory, factory::energy_sale::EnergySaleFactory};

mod energy_sold_by_period;
mod find_by_station;

fn timestamp(year: i32, month: u32, day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(10, 0, 0)
        .unwrap()
}
