use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::datetime;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EnergySaleDto {
    pub id: i32,
    /// Energy sold in kWh.
    pub energy_sold: f64,
    pub price_per_kwh: f64,
    #[serde(with = "datetime")]
    #[schema(value_type = String, example = "2023-01-05 10:00:00")]
    pub date_time: NaiveDateTime,
    pub station_id: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EnergySaleInputDto {
    pub energy_sold: f64,
    pub price_per_kwh: f64,
    #[serde(with = "datetime")]
    #[schema(value_type = String, example = "2023-01-05 10:00:00")]
    pub date_time: NaiveDateTime,
    pub station_id: i32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct PatchEnergySaleDto {
    #[serde(default)]
    pub energy_sold: Option<f64>,
    #[serde(default)]
    pub price_per_kwh: Option<f64>,
    #[serde(default, with = "datetime::option")]
    #[schema(value_type = Option<String>, example = "2023-01-05 10:00:00")]
    pub date_time: Option<NaiveDateTime>,
    #[serde(default)]
    pub station_id: Option<i32>,
}

/// Total energy sold within one period bucket.
///
/// `period` is `YYYY-MM-DD`, `YYYY-MM` or `YYYY` depending on the requested granularity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EnergySoldDto {
    pub period: String,
    pub energy_sold: f64,
}
