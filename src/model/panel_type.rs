use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PanelTypeDto {
    pub id: i32,
    pub type_name: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PanelTypeInputDto {
    pub type_name: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct PatchPanelTypeDto {
    #[serde(default)]
    pub type_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}
