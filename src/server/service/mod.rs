//! Service layer for business logic.
//!
//! Services sit between the controller layer and the data (repository) layer and work
//! with domain models rather than DTOs or entity models. The registry has no business
//! rules beyond what the store enforces, so every service delegates to its repository;
//! this is the layer where such rules belong when they appear.

pub mod battery;
pub mod battery_level;
pub mod crud;
pub mod energy_sale;
pub mod location;
pub mod owner_has_station;
pub mod panel_angle;
pub mod panel_production;
pub mod solar_panel;
pub mod station;
