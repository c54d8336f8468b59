//! SeaORM entity definitions for the solar registry schema.
//!
//! One module per table. Relations mirror the foreign keys created by the
//! `migration` crate so that `Schema::create_table_from_entity` produces the
//! same constraints for in-memory test databases.

pub mod prelude;

pub mod battery;
pub mod battery_level;
pub mod battery_producer;
pub mod energy_sale;
pub mod location;
pub mod owner;
pub mod owner_has_station;
pub mod panel_angle;
pub mod panel_production;
pub mod panel_type;
pub mod solar_panel;
pub mod station;
