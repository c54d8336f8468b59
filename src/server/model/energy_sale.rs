//! Energy sale domain models, parameters and the per-period aggregate.

use std::str::FromStr;

use chrono::NaiveDateTime;
use sea_orm::ActiveValue::Set;

use crate::{
    model::energy_sale::{EnergySaleDto, EnergySaleInputDto, EnergySoldDto, PatchEnergySaleDto},
    server::{
        data::crud::{set_if_some, Resource},
        error::AppError,
    },
};

/// Energy sold by a station at a given price per kWh.
#[derive(Debug, Clone, PartialEq)]
pub struct EnergySale {
    pub id: i32,
    pub energy_sold: f64,
    pub price_per_kwh: f64,
    pub date_time: NaiveDateTime,
    pub station_id: i32,
}

impl EnergySale {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The energy sale entity from the database
    ///
    /// # Returns
    /// - `EnergySale` - The converted domain model
    pub fn from_entity(entity: entity::energy_sale::Model) -> Self {
        Self {
            id: entity.id,
            energy_sold: entity.energy_sold,
            price_per_kwh: entity.price_per_kwh,
            date_time: entity.date_time,
            station_id: entity.station_id,
        }
    }

    /// Converts domain model to DTO for API responses.
    ///
    /// # Returns
    /// - `EnergySaleDto` - DTO with all energy sale fields for serialization
    pub fn into_dto(self) -> EnergySaleDto {
        EnergySaleDto {
            id: self.id,
            energy_sold: self.energy_sold,
            price_per_kwh: self.price_per_kwh,
            date_time: self.date_time,
            station_id: self.station_id,
        }
    }
}

/// Parameters for creating or replacing an energy sale.
#[derive(Debug, Clone)]
pub struct EnergySaleParam {
    pub energy_sold: f64,
    pub price_per_kwh: f64,
    pub date_time: NaiveDateTime,
    pub station_id: i32,
}

impl From<EnergySaleInputDto> for EnergySaleParam {
    fn from(dto: EnergySaleInputDto) -> Self {
        Self {
            energy_sold: dto.energy_sold,
            price_per_kwh: dto.price_per_kwh,
            date_time: dto.date_time,
            station_id: dto.station_id,
        }
    }
}

/// Parameters for a partial energy sale update.
#[derive(Debug, Clone, Default)]
pub struct PatchEnergySaleParam {
    pub energy_sold: Option<f64>,
    pub price_per_kwh: Option<f64>,
    pub date_time: Option<NaiveDateTime>,
    pub station_id: Option<i32>,
}

impl From<PatchEnergySaleDto> for PatchEnergySaleParam {
    fn from(dto: PatchEnergySaleDto) -> Self {
        Self {
            energy_sold: dto.energy_sold,
            price_per_kwh: dto.price_per_kwh,
            date_time: dto.date_time,
            station_id: dto.station_id,
        }
    }
}

/// Granularity used to group sales when summing energy sold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SalePeriod {
    Daily,
    Monthly,
    Yearly,
}

impl SalePeriod {
    /// Truncates a timestamp to the key of the bucket it falls into.
    ///
    /// # Returns
    /// - `String` - `YYYY-MM-DD`, `YYYY-MM` or `YYYY` depending on the period
    pub fn key(&self, date_time: &NaiveDateTime) -> String {
        let format = match self {
            Self::Daily => "%Y-%m-%d",
            Self::Monthly => "%Y-%m",
            Self::Yearly => "%Y",
        };

        date_time.format(format).to_string()
    }
}

impl FromStr for SalePeriod {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "daily" => Ok(Self::Daily),
            "monthly" => Ok(Self::Monthly),
            "yearly" => Ok(Self::Yearly),
            other => Err(AppError::BadRequest(format!(
                "Invalid period '{}', expected one of: daily, monthly, yearly",
                other
            ))),
        }
    }
}

/// Energy sold summed over one period bucket.
#[derive(Debug, Clone, PartialEq)]
pub struct EnergySoldByPeriod {
    pub period: String,
    pub energy_sold: f64,
}

impl EnergySoldByPeriod {
    pub fn into_dto(self) -> EnergySoldDto {
        EnergySoldDto {
            period: self.period,
            energy_sold: self.energy_sold,
        }
    }
}

pub struct EnergySaleResource;

impl Resource for EnergySaleResource {
    const NAME: &'static str = "EnergySale";

    type Entity = entity::energy_sale::Entity;
    type Model = entity::energy_sale::Model;
    type PrimaryKey = entity::energy_sale::PrimaryKey;
    type ActiveModel = entity::energy_sale::ActiveModel;

    type Domain = EnergySale;
    type Fields = EnergySaleParam;
    type Patch = PatchEnergySaleParam;

    fn from_entity(model: Self::Model) -> Self::Domain {
        EnergySale::from_entity(model)
    }

    fn apply_fields(active: &mut Self::ActiveModel, fields: Self::Fields) {
        active.energy_sold = Set(fields.energy_sold);
        active.price_per_kwh = Set(fields.price_per_kwh);
        active.date_time = Set(fields.date_time);
        active.station_id = Set(fields.station_id);
    }

    fn apply_patch(active: &mut Self::ActiveModel, patch: Self::Patch) {
        set_if_some(&mut active.energy_sold, patch.energy_sold);
        set_if_some(&mut active.price_per_kwh, patch.price_per_kwh);
        set_if_some(&mut active.date_time, patch.date_time);
        set_if_some(&mut active.station_id, patch.station_id);
    }
}
