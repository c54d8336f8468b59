use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of every 4xx/5xx response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}
