//! Factory methods for creating test data.
//!
//! Factories insert entities with sensible defaults, reducing boilerplate in tests. Each
//! entity has a `Factory` struct for customization and a `create_*` convenience function
//! for quick default creation. Foreign keys are passed explicitly so tests can control
//! which parent a row hangs off.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let location = factory::create_location(&db).await?;
//! let station = factory::create_station_at(&db, location.id).await?;
//!
//! // Or everything a station needs in one call
//! let (location, station) = factory::helpers::create_station_with_location(&db).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let sale = factory::energy_sale::EnergySaleFactory::new(&db, station.id)
//!     .energy_sold(42.0)
//!     .build()
//!     .await?;
//! ```

pub mod battery;
pub mod energy_sale;
pub mod helpers;
pub mod location;
pub mod owner;
pub mod panel_type;
pub mod solar_panel;
pub mod station;

pub use battery::create_battery;
pub use energy_sale::create_energy_sale;
pub use helpers::create_station;
pub use location::create_location;
pub use owner::create_owner;
pub use panel_type::create_panel_type;
pub use solar_panel::create_solar_panel;
pub use station::create_station_at;
