//! Test fixtures providing reusable test data without database insertion.
//!
//! Fixtures create in-memory entity models for unit tests and serve as the default
//! values of the factories. Unlike factories, fixtures do NOT insert data into the
//! database.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let station = fixture::station::entity();
//!
//! let large = fixture::station::entity_builder()
//!     .total_capacity(500.0)
//!     .build();
//! ```

pub mod energy_sale;
pub mod location;
pub mod station;

pub use energy_sale::{entity as energy_sale_entity, entity_builder as energy_sale_entity_builder};
pub use location::{entity as location_entity, entity_builder as location_entity_builder};
pub use station::{entity as station_entity, entity_builder as station_entity_builder};
