//! HTTP route handlers.
//!
//! `crud` holds the handlers shared by every resource together with the
//! [`RestResource`](crud::RestResource) trait that names a resource's path prefix and
//! transport types. Each resource module implements that trait, declares its filter
//! handlers and exposes a `router()` for [`crate::server::router`] to merge.

pub mod battery;
pub mod battery_level;
pub mod battery_producer;
pub mod crud;
pub mod energy_sale;
pub mod health;
pub mod location;
pub mod openapi;
pub mod owner;
pub mod owner_has_station;
pub mod panel_angle;
pub mod panel_production;
pub mod panel_type;
pub mod solar_panel;
pub mod station;

#[cfg(test)]
mod test;
