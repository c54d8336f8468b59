use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BatteryDto {
    pub id: i32,
    /// Free-form capacity label, e.g. `"10kWh"`.
    pub capacity: String,
    pub installation_date: NaiveDate,
    pub station_id: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BatteryInputDto {
    pub capacity: String,
    pub installation_date: NaiveDate,
    pub station_id: i32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct PatchBatteryDto {
    #[serde(default)]
    pub capacity: Option<String>,
    #[serde(default)]
    pub installation_date: Option<NaiveDate>,
    #[serde(default)]
    pub station_id: Option<i32>,
}
