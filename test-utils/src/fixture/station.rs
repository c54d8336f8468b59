//! Station fixtures for creating in-memory test data.
//!
//! Provides fixture functions for creating station entity models without database
//! insertion. Factories use these as their defaults.

use chrono::NaiveDate;
use entity::station;

/// Default installed capacity in kW.
pub const DEFAULT_TOTAL_CAPACITY: f64 = 100.0;

/// Default location ID for stations.
pub const DEFAULT_LOCATION_ID: i32 = 1;

/// Default installation date, 2023-01-01.
pub fn default_installation_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 1, 1).unwrap_or_default()
}

/// Creates a station entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - total_capacity: `100.0`
/// - installation_date: `2023-01-01`
/// - location_id: `1`
///
/// # Returns
/// - `station::Model` - In-memory station entity
pub fn entity() -> station::Model {
    entity_builder().build()
}

/// Creates a station entity builder for customizing test data.
///
/// # Example
///
/// ```rust,ignore
/// let station = fixture::station::entity_builder()
///     .location_id(7)
///     .build();
/// ```
pub fn entity_builder() -> StationEntityBuilder {
    StationEntityBuilder::default()
}

/// Builder for creating customized station entity models.
pub struct StationEntityBuilder {
    id: i32,
    total_capacity: f64,
    installation_date: NaiveDate,
    location_id: i32,
}

impl Default for StationEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            total_capacity: DEFAULT_TOTAL_CAPACITY,
            installation_date: default_installation_date(),
            location_id: DEFAULT_LOCATION_ID,
        }
    }
}

impl StationEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn total_capacity(mut self, total_capacity: f64) -> Self {
        self.total_capacity = total_capacity;
        self
    }

    pub fn installation_date(mut self, installation_date: NaiveDate) -> Self {
        self.installation_date = installation_date;
        self
    }

    pub fn location_id(mut self, location_id: i32) -> Self {
        self.location_id = location_id;
        self
    }

    pub fn build(self) -> station::Model {
        station::Model {
            id: self.id,
            total_capacity: self.total_capacity,
            installation_date: self.installation_date,
            location_id: self.location_id,
        }
    }
}
