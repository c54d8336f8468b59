use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::datetime;

/// Energy produced by a solar panel, in kWh, recorded at `date_time`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PanelProductionDto {
    pub id: i32,
    #[serde(with = "datetime")]
    #[schema(value_type = String, example = "2023-01-05 10:00:00")]
    pub date_time: NaiveDateTime,
    pub production: f64,
    pub solar_panel_id: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PanelProductionInputDto {
    #[serde(with = "datetime")]
    #[schema(value_type = String, example = "2023-01-05 10:00:00")]
    pub date_time: NaiveDateTime,
    pub production: f64,
    pub solar_panel_id: i32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct PatchPanelProductionDto {
    #[serde(default, with = "datetime::option")]
    #[schema(value_type = Option<String>, example = "2023-01-05 10:00:00")]
    pub date_time: Option<NaiveDateTime>,
    #[serde(default)]
    pub production: Option<f64>,
    #[serde(default)]
    pub solar_panel_id: Option<i32>,
}
