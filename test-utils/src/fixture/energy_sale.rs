//! Energy sale fixtures for creating in-memory test data.

use chrono::{NaiveDate, NaiveDateTime};
use entity::energy_sale;

/// Default energy sold in kWh.
pub const DEFAULT_ENERGY_SOLD: f64 = 100.0;

/// Default price per kWh.
pub const DEFAULT_PRICE_PER_KWH: f64 = 0.25;

/// Default sale timestamp, 2023-01-01 12:00:00.
pub fn default_date_time() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2023, 1, 1)
        .and_then(|date| date.and_hms_opt(12, 0, 0))
        .unwrap_or_default()
}

/// Creates an energy sale entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - energy_sold: `100.0`
/// - price_per_kwh: `0.25`
/// - date_time: `2023-01-01 12:00:00`
/// - station_id: `1`
pub fn entity() -> energy_sale::Model {
    entity_builder().build()
}

/// Creates an energy sale entity builder for customizing test data.
pub fn entity_builder() -> EnergySaleEntityBuilder {
    EnergySaleEntityBuilder::default()
}

/// Builder for creating customized energy sale entity models.
pub struct EnergySaleEntityBuilder {
    id: i32,
    energy_sold: f64,
    price_per_kwh: f64,
    date_time: NaiveDateTime,
    station_id: i32,
}

impl Default for EnergySaleEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            energy_sold: DEFAULT_ENERGY_SOLD,
            price_per_kwh: DEFAULT_PRICE_PER_KWH,
            date_time: default_date_time(),
            station_id: 1,
        }
    }
}

impl EnergySaleEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn energy_sold(mut self, energy_sold: f64) -> Self {
        self.energy_sold = energy_sold;
        self
    }

    pub fn price_per_kwh(mut self, price_per_kwh: f64) -> Self {
        self.price_per_kwh = price_per_kwh;
        self
    }

    pub fn date_time(mut self, date_time: NaiveDateTime) -> Self {
        self.date_time = date_time;
        self
    }

    pub fn station_id(mut self, station_id: i32) -> Self {
        self.station_id = station_id;
        self
    }

    pub fn build(self) -> energy_sale::Model {
        energy_sale::Model {
            id: self.id,
            energy_sold: self.energy_sold,
            price_per_kwh: self.price_per_kwh,
            date_time: self.date_time,
            station_id: self.station_id,
        }
    }
}
