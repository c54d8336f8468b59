//! Controller layer between the HTTP routes and the services.
//!
//! Controllers receive domain parameters already converted from request DTOs by the
//! route handlers and hand back domain models. They hold no logic of their own.

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
