use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SolarPanelDto {
    pub id: i32,
    pub installation_date: NaiveDate,
    pub panel_type_id: i32,
    pub station_id: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SolarPanelInputDto {
    pub installation_date: NaiveDate,
    pub panel_type_id: i32,
    pub station_id: i32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct PatchSolarPanelDto {
    #[serde(default)]
    pub installation_date: Option<NaiveDate>,
    #[serde(default)]
    pub panel_type_id: Option<i32>,
    #[serde(default)]
    pub station_id: Option<i32>,
}
