use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::datetime;

/// Charge reading of a battery at a point in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BatteryLevelDto {
    pub id: i32,
    #[serde(with = "datetime")]
    #[schema(value_type = String, example = "2023-01-05 10:00:00")]
    pub date_time: NaiveDateTime,
    pub charge_level: f64,
    pub battery_id: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BatteryLevelInputDto {
    #[serde(with = "datetime")]
    #[schema(value_type = String, example = "2023-01-05 10:00:00")]
    pub date_time: NaiveDateTime,
    pub charge_level: f64,
    pub battery_id: i32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct PatchBatteryLevelDto {
    #[serde(default, with = "datetime::option")]
    #[schema(value_type = Option<String>, example = "2023-01-05 10:00:00")]
    pub date_time: Option<NaiveDateTime>,
    #[serde(default)]
    pub charge_level: Option<f64>,
    #[serde(default)]
    pub battery_id: Option<i32>,
}
