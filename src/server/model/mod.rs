//! Server-side domain models and parameter types.
//!
//! Each module holds the domain model of one resource, the parameter types used for
//! creation, full replacement and partial updates, and the [`Resource`] descriptor that
//! binds them to their SeaORM entity. Domain models are converted from entity models at
//! the repository boundary and transformed to DTOs at the route boundary.
//!
//! [`Resource`]: crate::server::data::crud::Resource

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
