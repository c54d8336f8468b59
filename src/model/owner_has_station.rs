use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Share of a station held by an owner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OwnerHasStationDto {
    pub id: i32,
    pub owner_id: i32,
    pub station_id: i32,
    pub ownership_percentage: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OwnerHasStationInputDto {
    pub owner_id: i32,
    pub station_id: i32,
    pub ownership_percentage: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct PatchOwnerHasStationDto {
    #[serde(default)]
    pub owner_id: Option<i32>,
    #[serde(default)]
    pub station_id: Option<i32>,
    #[serde(default)]
    pub ownership_percentage: Option<f64>,
}
