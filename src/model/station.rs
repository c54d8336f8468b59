use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Solar installation located at a [`LocationDto`](super::location::LocationDto).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StationDto {
    pub id: i32,
    /// Installed capacity in kW.
    pub total_capacity: f64,
    pub installation_date: NaiveDate,
    pub location_id: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StationInputDto {
    pub total_capacity: f64,
    pub installation_date: NaiveDate,
    pub location_id: i32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct PatchStationDto {
    #[serde(default)]
    pub total_capacity: Option<f64>,
    #[serde(default)]
    pub installation_date: Option<NaiveDate>,
    #[serde(default)]
    pub location_id: Option<i32>,
}
