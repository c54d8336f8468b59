//! Transport models exchanged over HTTP.
//!
//! Each resource has a response DTO carrying the id, an input DTO with every writable
//! field (POST and PUT bodies) and a patch DTO where every field is optional.

pub mod api;
pub mod battery;
pub mod battery_level;
pub mod battery_producer;
pub mod datetime;
pub mod energy_sale;
pub mod location;
pub mod owner;
pub mod owner_has_station;
pub mod panel_angle;
pub mod panel_production;
pub mod panel_type;
pub mod solar_panel;
pub mod station;
